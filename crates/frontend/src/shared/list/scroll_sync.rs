//! One horizontal offset shared by every dynamic-column strip of a table
//! (flag row, header, body rows), so they scroll as a block.

use leptos::prelude::*;

use super::columns::DYNAMIC_COLUMN_WIDTH_PX;

#[derive(Debug, Clone, Copy)]
pub struct ScrollSync {
    offset: RwSignal<i32>,
}

impl ScrollSync {
    pub fn new() -> Self {
        Self {
            offset: RwSignal::new(0),
        }
    }

    pub fn set_offset(&self, left: i32) {
        if self.offset.get_untracked() != left {
            self.offset.set(left);
        }
    }

    /// Back to the first column, e.g. when the page brings a new column set.
    pub fn reset(&self) {
        self.set_offset(0);
    }
}

impl Default for ScrollSync {
    fn default() -> Self {
        Self::new()
    }
}

/// Width in pixels of a strip showing at most `max_visible` of `count` columns.
pub fn strip_width(count: usize, max_visible: usize) -> u32 {
    count.min(max_visible) as u32 * DYNAMIC_COLUMN_WIDTH_PX
}

/// Horizontally scrollable strip bound to a [`ScrollSync`].
#[component]
pub fn ScrollRegion(
    sync: ScrollSync,
    /// Number of dynamic columns on the page.
    #[prop(into)]
    count: Signal<usize>,
    max_visible: usize,
    #[prop(optional)] show_scrollbar: bool,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<leptos::html::Div>::new();

    Effect::new(move |_| {
        let left = sync.offset.get();
        if let Some(el) = node.get() {
            if el.scroll_left() != left {
                el.set_scroll_left(left);
            }
        }
    });

    let on_scroll = move |_| {
        if let Some(el) = node.get_untracked() {
            sync.set_offset(el.scroll_left());
        }
    };

    let class = if show_scrollbar {
        "dynamic-strip dynamic-strip--scrollbar"
    } else {
        "dynamic-strip"
    };

    view! {
        <div
            class=class
            node_ref=node
            on:scroll=on_scroll
            style=move || {
                let width = strip_width(count.get(), max_visible);
                format!("display: flex; overflow-x: auto; width: {width}px; max-width: {width}px;")
            }
        >
            {children()}
        </div>
    }
}
