//! Offset-based pagination for list pages.
//!
//! The API returns full collections; slicing happens client-side. Pages are
//! zero-indexed internally and shown one-indexed.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use leptos::prelude::*;

/// Number of pages needed for `len` items. An empty list still has one page
/// so the pager never renders "Page 1 of 0".
pub fn page_count(len: usize, per_page: usize) -> usize {
    len.div_ceil(per_page).max(1)
}

/// Index range of the items on `page`, clamped to the collection bounds.
pub fn page_slice(len: usize, page: usize, per_page: usize) -> std::ops::Range<usize> {
    let start = (page * per_page).min(len);
    let end = (start + per_page).min(len);
    start..end
}

/// Clamp a page index after the collection shrank (e.g. last row on the last
/// page was deleted).
pub fn clamp_page(page: usize, len: usize, per_page: usize) -> usize {
    page.min(page_count(len, per_page) - 1)
}

/// Prev/next pager with a position indicator.
#[component]
pub fn Pager(page: RwSignal<usize>, len: Signal<usize>, per_page: usize) -> impl IntoView {
    let pages = move || page_count(len.get(), per_page);

    view! {
        <div class="pager">
            <button
                class="btn pager__prev"
                disabled=move || page.get() == 0
                on:click=move |_| page.update(|p| *p = p.saturating_sub(1))
            >
                "Prev"
            </button>
            <span class="pager__position">
                {move || format!("Page {} of {}", page.get() + 1, pages())}
            </span>
            <button
                class="btn pager__next"
                disabled=move || page.get() + 1 >= pages()
                on:click=move |_| page.update(|p| *p += 1)
            >
                "Next"
            </button>
        </div>
    }
}
