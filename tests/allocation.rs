//! The per-sample path must not touch the heap.

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

use photolysis::{
    ActinicFluxTable, AtmosphericSample, Location, PhotolysisContext, PhotolysisKernel,
    RateSetEvaluator, SpectralDataStore, cos_zenith,
};

struct CountingAllocator;

thread_local! {
    static ALLOCATIONS: Cell<usize> = const { Cell::new(0) };
}

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let _ = ALLOCATIONS.try_with(|count| count.set(count.get() + 1));
        unsafe { System.alloc(layout) }
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) }
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let _ = ALLOCATIONS.try_with(|count| count.set(count.get() + 1));
        unsafe { System.realloc(ptr, layout, new_size) }
    }
}

#[global_allocator]
static GLOBAL: CountingAllocator = CountingAllocator;

/// Heap allocations made by `f` on the current thread.
fn allocations_during<T>(f: impl FnOnce() -> T) -> (usize, T) {
    let before = ALLOCATIONS.with(Cell::get);
    let out = f();
    let after = ALLOCATIONS.with(Cell::get);
    (after - before, out)
}

#[test]
fn hot_path_does_not_allocate() {
    let table = ActinicFluxTable::builtin().unwrap();
    let store = SpectralDataStore::builtin().unwrap();
    let kernel = PhotolysisKernel::from_channel(store.get("j_O3_O1D").unwrap());
    let location = Location::from_degrees(40.0, -105.0).unwrap();

    let (count, mu) = allocations_during(|| {
        cos_zenith(1719230400.0, location.latitude(), location.longitude())
    });
    assert_eq!(count, 0, "cos_zenith allocated");

    let (count, flux) = allocations_during(|| table.flux_vector(mu, 85000.0));
    assert_eq!(count, 0, "flux_vector allocated");

    let (count, j) = allocations_during(|| kernel.j_rate(250.0, &flux));
    assert_eq!(count, 0, "j_rate allocated");
    assert!(j > 0.0);
}

#[test]
fn evaluate_into_does_not_allocate() {
    let evaluator = RateSetEvaluator::all(PhotolysisContext::shared().unwrap()).unwrap();
    let location = Location::from_degrees(40.0, -105.0).unwrap();
    let sample = AtmosphericSample::new(85000.0, 270.0, 1.0e17);
    let mut rates = evaluator.new_rate_set();

    let (count, ()) = allocations_during(|| {
        for hour in 0..24 {
            let time = 1719187200.0 + 3600.0 * hour as f64;
            evaluator.evaluate_into(time, &location, &sample, &mut rates);
        }
    });
    assert_eq!(count, 0, "evaluate_into allocated");
    assert!(rates.iter().any(|(_, value)| value > 0.0));
}
