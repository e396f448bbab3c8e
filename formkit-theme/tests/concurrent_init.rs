//! Racing first access from many threads resolves exactly once.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

use formkit_theme::config::ThemeConfig;
use formkit_theme::{Theme, ThemeVariant};

const THREADS: usize = 16;

fn addr(theme: &dyn Theme) -> usize {
    theme as *const dyn Theme as *const () as usize
}

#[test]
fn test_concurrent_first_access_shares_one_theme() {
    let resolutions = Arc::new(AtomicUsize::new(0));
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let resolutions = Arc::clone(&resolutions);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let theme = formkit_theme::init_with(
                    ThemeConfig::new().with_selector("VisualStyles"),
                    move |variant: ThemeVariant| {
                        resolutions.fetch_add(1, Ordering::SeqCst);
                        variant == ThemeVariant::VisualStyles
                    },
                );
                addr(theme)
            })
        })
        .collect();

    let addresses: Vec<usize> = handles
        .into_iter()
        .map(|handle| handle.join().expect("thread panicked"))
        .collect();

    assert_eq!(resolutions.load(Ordering::SeqCst), 1);
    assert!(addresses.iter().all(|&a| a == addresses[0]));
    assert_eq!(addr(formkit_theme::current()), addresses[0]);
    assert_eq!(formkit_theme::current_variant(), ThemeVariant::VisualStyles);
}
