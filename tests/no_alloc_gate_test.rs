use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use blockfall::core::GameSession;
use blockfall::types::{GameAction, FALL_SPEED_MS};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = layout;
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = (layout, new_size);
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

/// Play one game to the end so every lifecycle path has run once.
fn play_out(session: &mut GameSession) {
    while session.phase().is_playing() {
        let _ = session.apply_action(GameAction::SoftDrop);
    }
    session.new_game();
    session.start();
}

#[test]
fn core_hot_paths_do_not_allocate() {
    // Setup (outside counting) so one-time allocations don't trip the gate.
    let mut session = GameSession::new(1);
    session.start();

    // Warm-up.
    play_out(&mut session);
    let _ = session.tick(16);
    let _ = session.apply_action(GameAction::MoveLeft);

    let allocs = with_alloc_counting(|| {
        for _ in 0..200 {
            let _ = session.tick(16);
        }

        for _ in 0..50 {
            let _ = session.apply_action(GameAction::MoveLeft);
            let _ = session.apply_action(GameAction::MoveRight);
            let _ = session.apply_action(GameAction::RotateRight);
            let _ = session.apply_action(GameAction::RotateLeft);
        }

        // Repeated drops drive the lock, line-clear and spawn paths.
        for _ in 0..500 {
            let _ = session.apply_action(GameAction::SoftDrop);
            let _ = session.tick(FALL_SPEED_MS);
            if !session.phase().is_playing() {
                session.new_game();
                session.start();
            }
        }
    });

    assert!(allocs == 0);
}
