use serde::Serialize;

/// Distance below the viewport top used as the probe point for the visible section.
pub const SCROLL_LOOKAHEAD: f64 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Home,
    About,
    Projects,
    Contact,
}

impl Region {
    /// Display order, which is also the order the tracker scans in.
    pub const ALL: [Region; 4] = [Self::Home, Self::About, Self::Projects, Self::Contact];

    pub fn anchor_id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    pub fn from_anchor_id(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|region| region.anchor_id() == value)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }
}

/// Measured vertical placement of a section anchor, in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionExtent {
    pub top: f64,
    pub height: f64,
}

impl SectionExtent {
    pub fn contains(self, cursor: f64) -> bool {
        cursor >= self.top && cursor < self.top + self.height
    }
}

pub fn scroll_cursor(offset: f64) -> f64 {
    offset + SCROLL_LOOKAHEAD
}

/// Returns the first region, in the order given, whose extent contains the
/// probe point for `offset`. `None` extents are anchors that are not in the
/// document and are skipped. The iterator is consumed lazily, so callers can
/// measure on demand.
pub fn locate_region<I>(offset: f64, extents: I) -> Option<Region>
where
    I: IntoIterator<Item = (Region, Option<SectionExtent>)>,
{
    let cursor = scroll_cursor(offset);

    extents.into_iter().find_map(|(region, extent)| {
        extent
            .filter(|extent| extent.contains(cursor))
            .map(|_| region)
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageEvent {
    /// Result of a scroll scan; `None` when no section contains the probe point.
    Scrolled(Option<Region>),
    MenuToggled,
    Navigated,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageState {
    pub active: Region,
    pub menu_open: bool,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            active: Region::Home,
            menu_open: false,
        }
    }
}

impl PageState {
    pub fn apply(self, event: PageEvent) -> Self {
        match event {
            PageEvent::Scrolled(Some(active)) => Self { active, ..self },
            PageEvent::Scrolled(None) => self,
            PageEvent::MenuToggled => Self {
                menu_open: !self.menu_open,
                ..self
            },
            PageEvent::Navigated => Self {
                menu_open: false,
                ..self
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stacked_layout() -> Vec<(Region, Option<SectionExtent>)> {
        vec![
            (Region::Home, Some(SectionExtent { top: 0.0, height: 800.0 })),
            (Region::About, Some(SectionExtent { top: 800.0, height: 800.0 })),
            (Region::Projects, Some(SectionExtent { top: 1600.0, height: 1200.0 })),
            (Region::Contact, Some(SectionExtent { top: 2800.0, height: 600.0 })),
        ]
    }

    fn scroll_to(state: PageState, offset: f64, layout: &[(Region, Option<SectionExtent>)]) -> PageState {
        state.apply(PageEvent::Scrolled(locate_region(offset, layout.iter().copied())))
    }

    #[test]
    fn initial_state_is_home_with_closed_menu() {
        let state = PageState::default();

        assert_eq!(state.active, Region::Home);
        assert!(!state.menu_open);
    }

    #[test]
    fn offset_near_top_selects_home() {
        let state = scroll_to(PageState::default(), 50.0, &stacked_layout());

        assert_eq!(state.active, Region::Home);
    }

    #[test]
    fn offset_inside_about_selects_about() {
        let state = scroll_to(PageState::default(), 900.0, &stacked_layout());

        assert_eq!(state.active, Region::About);
    }

    #[test]
    fn offset_past_every_section_keeps_previous_region() {
        let layout = stacked_layout();
        let state = scroll_to(PageState::default(), 2000.0, &layout);
        assert_eq!(state.active, Region::Projects);

        let after = scroll_to(state, 10_000.0, &layout);
        assert_eq!(after, state);
    }

    #[test]
    fn each_region_is_selected_from_inside_its_interval() {
        let layout = stacked_layout();

        for (region, extent) in &layout {
            let extent = extent.expect("layout measures every region");
            for fraction in [0.0, 0.25, 0.5, 0.99] {
                let offset = extent.top + extent.height * fraction - SCROLL_LOOKAHEAD;
                let state = scroll_to(PageState::default(), offset, &layout);
                assert_eq!(state.active, *region, "offset {offset} should select {region:?}");
            }
        }
    }

    #[test]
    fn interval_upper_bound_is_exclusive() {
        let layout = stacked_layout();

        let located = locate_region(800.0 - SCROLL_LOOKAHEAD, layout.iter().copied());

        assert_eq!(located, Some(Region::About));
    }

    #[test]
    fn first_matching_region_wins_on_overlap() {
        let layout = vec![
            (Region::Home, Some(SectionExtent { top: 0.0, height: 1000.0 })),
            (Region::About, Some(SectionExtent { top: 500.0, height: 1000.0 })),
        ];

        assert_eq!(locate_region(600.0, layout), Some(Region::Home));
    }

    #[test]
    fn missing_anchors_are_skipped() {
        let layout = vec![
            (Region::Home, None),
            (Region::About, Some(SectionExtent { top: 0.0, height: 500.0 })),
        ];

        assert_eq!(locate_region(0.0, layout), Some(Region::About));
    }

    #[test]
    fn measurement_stops_after_first_match() {
        let mut measured = Vec::new();
        let located = locate_region(
            0.0,
            Region::ALL.iter().map(|&region| {
                measured.push(region);
                let index = measured.len() as f64 - 1.0;
                (region, Some(SectionExtent { top: index * 800.0, height: 800.0 }))
            }),
        );

        assert_eq!(located, Some(Region::Home));
        assert_eq!(measured, vec![Region::Home]);
    }

    #[test]
    fn navigation_always_closes_menu() {
        let closed = PageState::default();
        let open = closed.apply(PageEvent::MenuToggled);
        assert!(open.menu_open);

        assert!(!open.apply(PageEvent::Navigated).menu_open);
        assert!(!closed.apply(PageEvent::Navigated).menu_open);
    }

    #[test]
    fn navigation_leaves_active_region_to_the_tracker() {
        let state = PageState {
            active: Region::About,
            menu_open: true,
        };

        assert_eq!(state.apply(PageEvent::Navigated).active, Region::About);
    }

    #[test]
    fn toggling_twice_returns_to_closed() {
        let state = PageState::default()
            .apply(PageEvent::MenuToggled)
            .apply(PageEvent::MenuToggled);

        assert!(!state.menu_open);
    }

    #[test]
    fn anchor_ids_round_trip() {
        for region in Region::ALL {
            assert_eq!(Region::from_anchor_id(region.anchor_id()), Some(region));
        }
        assert_eq!(Region::from_anchor_id("footer"), None);
    }

    #[test]
    fn region_serializes_as_anchor_id() {
        let value = serde_json::to_value(Region::Projects).expect("region serializes");

        assert_eq!(value, serde_json::json!("projects"));
    }
}
