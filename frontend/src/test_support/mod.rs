#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::state::{PanelState, SubtreeCache};
    use leptos::*;

    /// Puts `data` into `state` as if a load had just completed.
    pub fn seed_panel<T: 'static>(state: RwSignal<PanelState<T>>, data: Option<T>) {
        state.update(|s| {
            let token = s.begin_load();
            s.finish_load(token, Ok(data));
        });
    }

    /// Expands `parent` in `cache` with `children` already fetched.
    pub fn seed_subtree<T: 'static>(cache: RwSignal<SubtreeCache<T>>, parent: i64, children: Vec<T>) {
        cache.update(|c| {
            c.expand(parent);
            let token = c.begin_load(parent);
            c.finish_load(parent, token, Ok(children));
        });
    }
}
