//! Debug-build registry of live heap handles.
//!
//! Every allocation handed across the boundary is recorded with the type it was
//! created as. Reifying or releasing an address that is not live (already
//! released, never allocated, or allocated as something else) panics, which turns
//! into an abort at the C ABI. Release builds compile the checks out.

#[cfg(debug_assertions)]
mod live {
    use dashmap::DashMap;
    use once_cell::sync::Lazy;

    static LIVE: Lazy<DashMap<usize, &'static str>> = Lazy::new(DashMap::new);

    pub(crate) fn register(addr: usize, kind: &'static str) {
        if let Some(previous) = LIVE.insert(addr, kind) {
            panic!("allocator returned live address {addr:#x} (held by {previous})");
        }
    }

    pub(crate) fn check_live(addr: usize, kind: &'static str) {
        match LIVE.get(&addr) {
            Some(entry) if *entry.value() == kind => {}
            Some(entry) => panic!(
                "handle {addr:#x} is a {}, not a live {kind}",
                entry.value()
            ),
            None => panic!("handle {addr:#x} is not a live {kind}"),
        }
    }

    #[cfg(test)]
    pub(crate) fn is_live(addr: usize, kind: &'static str) -> bool {
        LIVE.get(&addr).is_some_and(|entry| *entry.value() == kind)
    }

    pub(crate) fn release(addr: usize, kind: &'static str) {
        if LIVE.remove_if(&addr, |_, live| *live == kind).is_none() {
            // reports why the entry was not removable
            check_live(addr, kind);
            panic!("handle {addr:#x} was released concurrently");
        }
    }
}

#[cfg(debug_assertions)]
pub(crate) use live::{check_live, register, release};

#[cfg(all(test, debug_assertions))]
pub(crate) use live::is_live;

#[cfg(not(debug_assertions))]
#[inline(always)]
pub(crate) fn register(_addr: usize, _kind: &'static str) {}

#[cfg(not(debug_assertions))]
#[inline(always)]
pub(crate) fn check_live(_addr: usize, _kind: &'static str) {}

#[cfg(not(debug_assertions))]
#[inline(always)]
pub(crate) fn release(_addr: usize, _kind: &'static str) {}
