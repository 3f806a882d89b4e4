// src/resolution.rs

//! Enumeration and selection of fullscreen display resolutions.
//!
//! The catalog is rebuilt from the backend's native mode list whenever the
//! display or the aspect-ratio filter changes. Entries are kept sorted
//! ascending by area and deduplicated so the options UI can present them
//! directly.

use log::debug;

/// Tolerance used when comparing a mode's aspect ratio to the desktop's.
const ASPECT_RATIO_TOLERANCE: f32 = 0.0001;

/// Resolution returned when the catalog has no entries at all.
const FALLBACK_RESOLUTION: Resolution = Resolution {
    width: 640,
    height: 480,
};

/// A display resolution in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Self {
        Resolution { width, height }
    }

    #[inline]
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    #[inline]
    fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// The set of fullscreen resolutions the current display supports, filtered
/// and ordered for presentation and closest-match lookup.
#[derive(Debug, Default)]
pub struct ResolutionCatalog {
    entries: Vec<Resolution>,
}

impl ResolutionCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the catalog from a native mode list, replacing any previous
    /// contents.
    ///
    /// Modes whose aspect ratio differs from the desktop's by more than the
    /// tolerance are skipped unless `allow_any_aspect_ratio` is set. The
    /// survivors are sorted ascending by area (stable, so equal-area modes
    /// keep their arrival order) and consecutive exact duplicates are
    /// compacted away.
    pub fn rebuild(
        &mut self,
        modes: &[Resolution],
        desktop: Resolution,
        allow_any_aspect_ratio: bool,
    ) {
        let desktop_ratio = desktop.aspect_ratio();

        self.entries.clear();
        for mode in modes {
            if allow_any_aspect_ratio
                || (desktop_ratio - mode.aspect_ratio()).abs() < ASPECT_RATIO_TOLERANCE
            {
                self.entries.push(*mode);
            }
        }

        self.entries.sort_by_key(Resolution::area);
        self.entries.dedup();

        debug!(
            "Resolution catalog rebuilt: {} of {} modes kept (desktop {}x{}, any_aspect={})",
            self.entries.len(),
            modes.len(),
            desktop.width,
            desktop.height,
            allow_any_aspect_ratio
        );
    }

    /// Returns the catalog entry closest to the requested size.
    ///
    /// An exact match wins outright; otherwise the entry with the smallest
    /// absolute area difference is chosen, ties resolved by catalog order.
    /// An empty catalog yields the hard-coded 640x480 fallback.
    pub fn closest_to(&self, width: u32, height: u32) -> Resolution {
        let target = Resolution::new(width, height);
        let target_area = target.area();

        let mut closest: Option<(u64, Resolution)> = None;
        for entry in &self.entries {
            if *entry == target {
                return *entry;
            }
            let diff = entry.area().abs_diff(target_area);
            match closest {
                Some((best, _)) if diff >= best => {}
                _ => closest = Some((diff, *entry)),
            }
        }

        closest
            .map(|(_, resolution)| resolution)
            .unwrap_or(FALLBACK_RESOLUTION)
    }

    /// Largest entry by area, if the catalog is non-empty. Used to seed the
    /// configured fullscreen resolution when none is set.
    pub fn largest(&self) -> Option<Resolution> {
        self.entries.last().copied()
    }

    pub fn entries(&self) -> &[Resolution] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn res(w: u32, h: u32) -> Resolution {
        Resolution::new(w, h)
    }

    #[test]
    fn rebuild_sorts_by_area_and_removes_duplicates() {
        let mut catalog = ResolutionCatalog::new();
        catalog.rebuild(
            &[
                res(1024, 768),
                res(800, 600),
                res(800, 600),
                res(640, 480),
                res(1024, 768),
            ],
            res(1600, 1200),
            false,
        );
        assert_eq!(
            catalog.entries(),
            &[res(640, 480), res(800, 600), res(1024, 768)]
        );
    }

    #[test]
    fn rebuild_filters_mismatched_aspect_ratios() {
        let mut catalog = ResolutionCatalog::new();
        // Desktop is 4:3; the widescreen modes must be dropped.
        catalog.rebuild(
            &[
                res(800, 600),
                res(800, 600),
                res(1920, 1080),
                res(1280, 720),
                res(1024, 768),
            ],
            res(1600, 1200),
            false,
        );
        assert_eq!(catalog.entries(), &[res(800, 600), res(1024, 768)]);
    }

    #[test]
    fn rebuild_keeps_everything_when_any_aspect_allowed() {
        let mut catalog = ResolutionCatalog::new();
        catalog.rebuild(
            &[res(1920, 1080), res(800, 600)],
            res(1600, 1200),
            true,
        );
        assert_eq!(catalog.entries(), &[res(800, 600), res(1920, 1080)]);
    }

    #[test]
    fn rebuild_replaces_previous_contents() {
        let mut catalog = ResolutionCatalog::new();
        catalog.rebuild(&[res(800, 600)], res(800, 600), false);
        catalog.rebuild(&[res(1024, 768)], res(1024, 768), false);
        assert_eq!(catalog.entries(), &[res(1024, 768)]);
    }

    #[test]
    fn closest_to_prefers_exact_match() {
        let mut catalog = ResolutionCatalog::new();
        catalog.rebuild(
            &[res(640, 480), res(800, 600), res(1024, 768)],
            res(1024, 768),
            false,
        );
        assert_eq!(catalog.closest_to(800, 600), res(800, 600));
    }

    #[test]
    fn closest_to_minimizes_area_difference() {
        let mut catalog = ResolutionCatalog::new();
        catalog.rebuild(
            &[res(640, 480), res(1024, 768)],
            res(1024, 768),
            false,
        );
        // 720x540 is much closer in area to 640x480 than to 1024x768.
        assert_eq!(catalog.closest_to(720, 540), res(640, 480));
        assert_eq!(catalog.closest_to(1000, 750), res(1024, 768));
    }

    #[test]
    fn closest_to_ties_resolve_in_catalog_order() {
        let mut catalog = ResolutionCatalog::new();
        // Equal areas, arrival order preserved by the stable sort.
        catalog.rebuild(&[res(600, 800), res(800, 600)], res(100, 100), true);
        assert_eq!(catalog.closest_to(1, 1), res(600, 800));
    }

    #[test]
    fn closest_to_on_empty_catalog_returns_fallback() {
        let catalog = ResolutionCatalog::new();
        assert_eq!(catalog.closest_to(1920, 1080), res(640, 480));
    }

    #[test]
    fn largest_is_last_after_sort() {
        let mut catalog = ResolutionCatalog::new();
        assert_eq!(catalog.largest(), None);
        catalog.rebuild(
            &[res(1024, 768), res(640, 480)],
            res(1024, 768),
            false,
        );
        assert_eq!(catalog.largest(), Some(res(1024, 768)));
    }
}
