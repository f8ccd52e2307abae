use studio_core::{derive_view, CommandBindings, DerivedView, RouteContext};

use crate::address::AddressBar;
use crate::store::StoreHandle;

/// Binds a route to the live store: the runtime side of mounting the
/// annotation page. Strips one-time query parameters from the address bar
/// as a side effect of binding.
pub fn connect(
    route: &RouteContext,
    address: &AddressBar,
    store: &StoreHandle,
) -> CommandBindings<StoreHandle> {
    CommandBindings::bind(route, &address.current(), address, store.clone())
}

/// Current view of the store scoped to `route`.
pub fn view(route: &RouteContext, store: &StoreHandle) -> DerivedView {
    derive_view(route, &store.snapshot())
}
