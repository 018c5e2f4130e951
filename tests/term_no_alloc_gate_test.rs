use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tetris_supply::core::{PieceSupply, SupplySnapshot};
use tetris_supply::term::{FrameBuffer, StatusView, SupplyView, TerminalRenderer, Viewport};
use tetris_supply::types::SupplyAction;

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

#[test]
fn supply_view_render_is_allocation_free_after_warmup() {
    let view = SupplyView::new();
    let viewport = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    let mut supply = PieceSupply::new(1);
    let mut snap = SupplySnapshot::default();
    let status = StatusView {
        text: "Played [T 0]",
        error: false,
    };

    // Warm-up (initial clears).
    supply.snapshot_into(&mut snap);
    view.render_into(&snap, Some(&status), viewport, &mut fb);

    let allocs = with_alloc_counting(|| {
        for _ in 0..200 {
            let _ = supply.apply_action(SupplyAction::Reserve);
            let _ = supply.apply_action(SupplyAction::UseReserve);
            supply.snapshot_into(&mut snap);
            view.render_into(&snap, Some(&status), viewport, &mut fb);
        }
    });

    assert!(allocs == 0);
}

#[test]
fn renderer_frame_encoding_is_allocation_free_after_warmup() {
    let view = SupplyView::new();
    let viewport = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);
    let mut renderer = TerminalRenderer::new();

    let mut supply = PieceSupply::new(7);
    let mut snap = SupplySnapshot::default();
    let status = StatusView {
        text: "Reserved [T 0]",
        error: false,
    };

    // Warm-up: first full frame plus one diff frame.
    supply.snapshot_into(&mut snap);
    view.render_into(&snap, Some(&status), viewport, &mut fb);
    renderer.encode_frame(&fb).unwrap();
    renderer.encode_frame(&fb).unwrap();

    let allocs = with_alloc_counting(|| {
        for i in 0..200 {
            let action = if i % 2 == 0 {
                SupplyAction::Reserve
            } else {
                SupplyAction::UseReserve
            };
            let _ = supply.apply_action(action);
            supply.snapshot_into(&mut snap);
            view.render_into(&snap, Some(&status), viewport, &mut fb);
            let _ = renderer.encode_frame(&fb);
        }
        for _ in 0..10 {
            let _ = renderer.encode_frame(&fb);
        }
    });

    assert_eq!(allocs, 0);
}
