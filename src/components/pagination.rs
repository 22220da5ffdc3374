//! Pagination control.
//!
//! The component owns no state: the caller supplies `current_page`,
//! `total_pages`, and the page-size selection on every render and receives
//! change notifications through callbacks. Out-of-range input is clamped,
//! never rejected, and a request that lands on the already-current value is
//! dropped without notifying anyone.

use log::{debug, trace};
use taffy::prelude::{auto, length, percent};

use crate::render::{Icon, Node};
use crate::style::{Border, Cursor, Visual};
use crate::tokens::{Tokens, tokens};

/// Window width used when the caller does not ask for another one.
pub const DEFAULT_WINDOW: i32 = 5;

/// Bounds `value` to `[min, max]`. Total over its domain; `min > max` is the
/// caller's responsibility to avoid.
pub fn clamp<T: Ord>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Page numbers to expose as direct-click controls.
///
/// The window tracks `current`, centered where possible, and slides against
/// either boundary instead of truncating: with `total > visible` the result
/// is always exactly `visible` contiguous pages.
pub fn build_pages(current: i32, total: i32, visible: i32) -> Vec<i32> {
    if total <= 0 || visible <= 0 {
        return Vec::new();
    }
    if total <= visible {
        return (1..=total).collect();
    }
    let half = visible / 2;
    let mut start = (current - half).max(1);
    let end = if start + visible - 1 > total {
        start = total - visible + 1;
        total
    } else {
        start + visible - 1
    };
    (start..=end).collect()
}

/// Click messages the rendered tree emits; feed them back through
/// [`Pagination::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationEvent {
    First,
    Previous,
    Next,
    Last,
    Page(i32),
    PageSize(u32),
}

/// Pagination props plus the two change callbacks.
pub struct Pagination {
    current_page: i32,
    total_pages: i32,
    page_size: Option<u32>,
    page_size_options: Vec<u32>,
    window: i32,
    on_page_change: Option<Box<dyn Fn(i32)>>,
    on_page_size_change: Option<Box<dyn Fn(u32)>>,
}

impl Pagination {
    pub fn new(current_page: i32, total_pages: i32) -> Self {
        Self {
            current_page,
            total_pages,
            page_size: None,
            page_size_options: vec![10, 25, 50],
            window: DEFAULT_WINDOW,
            on_page_change: None,
            on_page_size_change: None,
        }
    }

    /// An empty list removes the page-size dropdown.
    pub fn page_size_options(mut self, options: impl IntoIterator<Item = u32>) -> Self {
        self.page_size_options = options.into_iter().collect();
        self
    }

    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }

    pub fn window(mut self, visible: i32) -> Self {
        self.window = visible;
        self
    }

    pub fn on_page_change(mut self, callback: impl Fn(i32) + 'static) -> Self {
        self.on_page_change = Some(Box::new(callback));
        self
    }

    pub fn on_page_size_change(mut self, callback: impl Fn(u32) + 'static) -> Self {
        self.on_page_size_change = Some(Box::new(callback));
        self
    }

    /// Caller input clamped into `[1, total_pages]`.
    pub fn effective_page(&self) -> i32 {
        clamp(self.current_page, 1, self.total_pages.max(1))
    }

    /// Explicit size if set, otherwise the first offered option.
    pub fn effective_page_size(&self) -> u32 {
        self.page_size
            .unwrap_or_else(|| self.page_size_options.first().copied().unwrap_or(10))
    }

    /// Honors a page request only when the clamped target differs from the
    /// effective page; no-op requests are dropped.
    pub fn request_page(&self, page: i32) {
        if self.total_pages < 1 {
            return;
        }
        let next = clamp(page, 1, self.total_pages);
        if next != page {
            debug!("page request {page} clamped to {next}");
        }
        if next == self.effective_page() {
            trace!("dropping no-op request for page {next}");
            return;
        }
        if let Some(callback) = &self.on_page_change {
            callback(next);
        }
    }

    /// Notifies only on an actual size change.
    pub fn request_page_size(&self, size: u32) {
        if size == self.effective_page_size() {
            trace!("dropping no-op request for page size {size}");
            return;
        }
        if let Some(callback) = &self.on_page_size_change {
            callback(size);
        }
    }

    pub fn update(&self, event: PaginationEvent) {
        match event {
            PaginationEvent::First => self.request_page(1),
            PaginationEvent::Previous => self.request_page(self.effective_page() - 1),
            PaginationEvent::Next => self.request_page(self.effective_page() + 1),
            PaginationEvent::Last => self.request_page(self.total_pages),
            PaginationEvent::Page(page) => self.request_page(page),
            PaginationEvent::PageSize(size) => self.request_page_size(size),
        }
    }

    /// `None` when there is nothing to paginate.
    pub fn render(&self) -> Option<Node<PaginationEvent>> {
        if self.total_pages < 1 {
            return None;
        }
        let t = tokens();
        let current = self.effective_page();
        let pages = build_pages(current, self.total_pages, self.window);
        let at_first = current == 1;
        let at_last = current == self.total_pages;

        let strip = Node::container()
            .layout(taffy::Style {
                display: taffy::style::Display::Flex,
                align_items: Some(taffy::style::AlignItems::Center),
                gap: length(t.spacing.sm),
                ..taffy::Style::default()
            })
            .children(pages.iter().map(|&page| page_button(t, page, page == current)));

        let mut root = Node::container()
            .layout(taffy::Style {
                display: taffy::style::Display::Flex,
                align_items: Some(taffy::style::AlignItems::Center),
                justify_content: Some(taffy::style::JustifyContent::Center),
                flex_wrap: taffy::style::FlexWrap::Wrap,
                gap: length(t.spacing.sm),
                size: taffy::geometry::Size {
                    width: percent(1.0),
                    height: auto(),
                },
                ..taffy::Style::default()
            })
            .visual(
                Visual::new()
                    .font_family(t.typography.control_font_family)
                    .foreground(t.colors.text_default),
            )
            .child(icon_button(
                t,
                Icon::AnglesLeft,
                "Go to first page",
                at_first,
                PaginationEvent::First,
            ))
            .child(icon_button(
                t,
                Icon::AngleLeft,
                "Previous page",
                at_first,
                PaginationEvent::Previous,
            ))
            .child(strip)
            .child(icon_button(
                t,
                Icon::AngleRight,
                "Next page",
                at_last,
                PaginationEvent::Next,
            ))
            .child(icon_button(
                t,
                Icon::AnglesRight,
                "Go to last page",
                at_last,
                PaginationEvent::Last,
            ));

        if !self.page_size_options.is_empty() {
            root = root.child(self.size_dropdown(t));
        }
        Some(root)
    }

    fn size_dropdown(&self, t: &Tokens) -> Node<PaginationEvent> {
        let size = self.effective_page_size();
        let select = Node::select()
            .layout(taffy::Style {
                flex_grow: 1.0,
                ..taffy::Style::default()
            })
            .visual(
                Visual::new()
                    .font_family(t.typography.control_font_family)
                    .font_size(t.typography.base_font_size)
                    .foreground(t.colors.text_default)
                    .cursor(Cursor::Pointer),
            )
            .attr("value", size.to_string())
            .children(self.page_size_options.iter().map(|&option| {
                let mut node = Node::select_option()
                    .attr("value", option.to_string())
                    .on_click(PaginationEvent::PageSize(option))
                    .child(Node::text(option.to_string()));
                if option == size {
                    node = node.attr("selected", "true");
                }
                node
            }));

        let field = Node::container()
            .layout(taffy::Style {
                display: taffy::style::Display::Flex,
                align_items: Some(taffy::style::AlignItems::Center),
                justify_content: Some(taffy::style::JustifyContent::SpaceBetween),
                padding: taffy::geometry::Rect {
                    left: length(t.spacing.md),
                    right: length(t.spacing.md),
                    top: length(6.0),
                    bottom: length(6.0),
                },
                size: taffy::geometry::Size {
                    width: percent(1.0),
                    height: length(32.0),
                },
                ..taffy::Style::default()
            })
            .visual(
                Visual::new()
                    .background(t.colors.dropdown_background)
                    .outline(Border::new(1.0, t.colors.dropdown_border))
                    .corner_radius(t.radii.md),
            )
            .child(select)
            .child(
                Node::icon(Icon::ChevronDown).visual(
                    Visual::new()
                        .font_size(12.0)
                        .foreground(t.colors.icon_default),
                ),
            );

        Node::container()
            .layout(taffy::Style {
                display: taffy::style::Display::Flex,
                flex_direction: taffy::style::FlexDirection::Column,
                align_items: Some(taffy::style::AlignItems::FlexStart),
                gap: length(t.spacing.xs),
                size: taffy::geometry::Size {
                    width: length(72.0),
                    height: auto(),
                },
                ..taffy::Style::default()
            })
            .child(field)
    }
}

// 32x32 hit target shared by page and icon buttons.
fn control_layout(t: &Tokens) -> taffy::Style {
    taffy::Style {
        display: taffy::style::Display::Flex,
        align_items: Some(taffy::style::AlignItems::Center),
        justify_content: Some(taffy::style::JustifyContent::Center),
        gap: length(10.0),
        padding: taffy::geometry::Rect {
            left: length(t.spacing.md),
            right: length(t.spacing.md),
            top: length(t.spacing.xs),
            bottom: length(t.spacing.xs),
        },
        size: taffy::geometry::Size {
            width: length(32.0),
            height: length(32.0),
        },
        ..taffy::Style::default()
    }
}

fn control_visual(t: &Tokens) -> Visual {
    Visual::new()
        .font_family(t.typography.control_font_family)
        .font_size(t.typography.base_font_size)
        .line_height(t.typography.line_height)
        .letter_spacing(t.typography.letter_spacing)
        .corner_radius(t.radii.md)
        .cursor(Cursor::Pointer)
}

fn icon_button(
    t: &Tokens,
    icon: Icon,
    label: &'static str,
    disabled: bool,
    event: PaginationEvent,
) -> Node<PaginationEvent> {
    let cursor = if disabled {
        Cursor::NotAllowed
    } else {
        Cursor::Pointer
    };
    let icon_color = if disabled {
        t.colors.icon_disabled
    } else {
        t.colors.icon_default
    };
    let mut node = Node::button()
        .layout(control_layout(t))
        .visual(
            control_visual(t)
                .cursor(cursor)
                .opacity(if disabled { 0.5 } else { 1.0 }),
        )
        .attr("aria-label", label)
        .disabled(disabled)
        .child(
            Node::icon(icon).visual(
                Visual::new()
                    .font_size(t.typography.base_font_size)
                    .foreground(icon_color),
            ),
        );
    if !disabled {
        node = node.on_click(event);
    }
    node
}

fn page_button(t: &Tokens, page: i32, active: bool) -> Node<PaginationEvent> {
    let mut visual = control_visual(t)
        .font_weight(400)
        .corner_radius(if active { t.radii.circle } else { t.radii.md })
        .foreground(if active {
            t.colors.text_active
        } else {
            t.colors.text_default
        });
    if active {
        visual = visual.background(t.colors.surface_active);
    }
    let mut node = Node::button()
        .layout(control_layout(t))
        .visual(visual)
        .child(Node::text(page.to_string()))
        .on_click(PaginationEvent::Page(page));
    if active {
        node = node.attr("aria-current", "page");
    }
    node
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::render::NodeKind;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn clamp_bounds_the_value() {
        assert_eq!(clamp(0, 1, 10), 1);
        assert_eq!(clamp(11, 1, 10), 10);
        assert_eq!(clamp(5, 1, 10), 5);
        assert_eq!(clamp(1, 1, 10), 1);
        assert_eq!(clamp(10, 1, 10), 10);
        assert_eq!(clamp(-40, -30, -20), -30);
    }

    #[test]
    fn window_shows_every_page_when_total_fits() {
        assert_eq!(build_pages(1, 3, 5), vec![1, 2, 3]);
        assert_eq!(build_pages(7, 3, 5), vec![1, 2, 3]);
        assert_eq!(build_pages(1, 0, 5), Vec::<i32>::new());
    }

    #[test]
    fn window_centers_on_the_current_page() {
        assert_eq!(build_pages(50, 100, 5), vec![48, 49, 50, 51, 52]);
    }

    #[test]
    fn window_anchors_at_the_start() {
        assert_eq!(build_pages(1, 100, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(build_pages(2, 100, 5), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn window_anchors_at_the_end() {
        assert_eq!(build_pages(100, 100, 5), vec![96, 97, 98, 99, 100]);
        assert_eq!(build_pages(99, 100, 5), vec![96, 97, 98, 99, 100]);
    }

    #[test]
    fn window_invariants_hold_across_the_domain() {
        for &total in &[0, 1, 4, 5, 6, 100] {
            for current in -5..=total + 5 {
                let pages = build_pages(current, total, 5);
                if total <= 0 {
                    assert!(pages.is_empty());
                    continue;
                }
                assert_eq!(pages.len() as i32, total.min(5), "total={total} current={current}");
                for pair in pages.windows(2) {
                    assert_eq!(pair[1], pair[0] + 1);
                }
                assert!(pages[0] >= 1);
                assert!(pages[pages.len() - 1] <= total);
            }
        }
    }

    #[test]
    fn no_op_page_request_stays_silent() {
        init_logging();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let pagination =
            Pagination::new(5, 10).on_page_change(move |page| sink.borrow_mut().push(page));

        pagination.request_page(5);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn out_of_range_request_is_clamped_then_honored() {
        init_logging();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let pagination =
            Pagination::new(5, 10).on_page_change(move |page| sink.borrow_mut().push(page));

        pagination.request_page(0);
        pagination.request_page(99);
        assert_eq!(*seen.borrow(), vec![1, 10]);
    }

    #[test]
    fn clamped_request_matching_current_page_is_dropped() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        // caller-supplied page 42 is effectively page 10
        let pagination =
            Pagination::new(42, 10).on_page_change(move |page| sink.borrow_mut().push(page));

        assert_eq!(pagination.effective_page(), 10);
        pagination.update(PaginationEvent::Next);
        pagination.update(PaginationEvent::Last);
        assert!(seen.borrow().is_empty());

        pagination.update(PaginationEvent::Previous);
        assert_eq!(*seen.borrow(), vec![9]);
    }

    #[test]
    fn page_size_notifies_only_on_change() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let pagination = Pagination::new(1, 10)
            .page_size(25)
            .on_page_size_change(move |size| sink.borrow_mut().push(size));

        pagination.request_page_size(25);
        assert!(seen.borrow().is_empty());
        pagination.update(PaginationEvent::PageSize(50));
        assert_eq!(*seen.borrow(), vec![50]);
    }

    #[test]
    fn page_size_defaults_to_the_first_option() {
        let pagination = Pagination::new(1, 10).page_size_options([25, 50]);
        assert_eq!(pagination.effective_page_size(), 25);
        let bare = Pagination::new(1, 10).page_size_options([]);
        assert_eq!(bare.effective_page_size(), 10);
    }

    #[test]
    fn degenerate_range_renders_nothing() {
        assert!(Pagination::new(1, 0).render().is_none());
        assert!(Pagination::new(3, -2).render().is_none());

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let pagination =
            Pagination::new(1, 0).on_page_change(move |page| sink.borrow_mut().push(page));
        pagination.request_page(3);
        assert!(seen.borrow().is_empty());
    }

    fn page_buttons(tree: &Node<PaginationEvent>) -> Vec<(i32, bool)> {
        let mut found = Vec::new();
        tree.walk(&mut |node| {
            if let Some(PaginationEvent::Page(page)) = node.on_click {
                found.push((page, node.attr_value("aria-current") == Some("page")));
            }
        });
        found
    }

    #[test]
    fn tree_holds_the_anchored_window() {
        let tree = Pagination::new(100, 100).render().unwrap();
        let pages: Vec<i32> = page_buttons(&tree).iter().map(|&(page, _)| page).collect();
        assert_eq!(pages, vec![96, 97, 98, 99, 100]);
    }

    #[test]
    fn only_the_active_page_is_marked_current() {
        let tree = Pagination::new(3, 10).render().unwrap();
        let active: Vec<i32> = page_buttons(&tree)
            .iter()
            .filter(|&&(_, active)| active)
            .map(|&(page, _)| page)
            .collect();
        assert_eq!(active, vec![3]);
    }

    fn find_by_label<'a>(
        tree: &'a Node<PaginationEvent>,
        label: &str,
    ) -> Option<&'a Node<PaginationEvent>> {
        let mut found = None;
        tree.walk(&mut |node| {
            if node.attr_value("aria-label") == Some(label) {
                found = Some(node);
            }
        });
        found
    }

    #[test]
    fn edge_buttons_disable_against_their_boundary() {
        let tree = Pagination::new(1, 10).render().unwrap();
        let first = find_by_label(&tree, "Go to first page").unwrap();
        assert!(first.disabled);
        assert!(first.on_click.is_none());
        assert_eq!(first.visual.cursor, Some(Cursor::NotAllowed));
        assert_eq!(first.visual.opacity, Some(0.5));
        let next = find_by_label(&tree, "Next page").unwrap();
        assert!(!next.disabled);
        assert_eq!(next.on_click, Some(PaginationEvent::Next));
    }

    #[test]
    fn dropdown_follows_the_offered_options() {
        let tree = Pagination::new(1, 10).page_size(25).render().unwrap();
        let mut selects = 0;
        let mut options = Vec::new();
        tree.walk(&mut |node| match node.kind {
            NodeKind::Select => selects += 1,
            NodeKind::SelectOption => {
                options.push((
                    node.attr_value("value").map(str::to_owned),
                    node.attr_value("selected").is_some(),
                ));
            }
            _ => {}
        });
        assert_eq!(selects, 1);
        assert_eq!(options.len(), 3);
        assert_eq!(
            options[1],
            (Some("25".to_string()), true),
        );

        let bare = Pagination::new(1, 10).page_size_options([]).render().unwrap();
        let mut any_select = false;
        bare.walk(&mut |node| any_select |= node.kind == NodeKind::Select);
        assert!(!any_select);
    }

    #[test]
    fn active_page_gets_the_circle_treatment() {
        let t = tokens();
        let tree = Pagination::new(3, 10).render().unwrap();
        let mut checked = false;
        tree.walk(&mut |node| {
            if node.on_click == Some(PaginationEvent::Page(3)) {
                assert_eq!(node.visual.corner_radius, Some(t.radii.circle));
                let bg = node.visual.background.unwrap().to_rgba8();
                let want = t.colors.surface_active.to_rgba8();
                assert_eq!((bg.r, bg.g, bg.b), (want.r, want.g, want.b));
                checked = true;
            }
        });
        assert!(checked);
    }
}
