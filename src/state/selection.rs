//! Selection - the active model and its live parameters

use tracing::{debug, info, warn};

use super::params::{MaterialParams, ParamUpdate};
use crate::catalog::{Catalog, ModelDescriptor};
use crate::config::DEFAULT_BACKGROUND;
use crate::error::{GalleryError, GalleryResult};
use crate::primitives::{Coefficient, HexColor};

/// Active descriptor id, live material parameters and view signals.
///
/// Holds only the fallback color of the active descriptor, so edits never
/// need the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    active_id: String,
    default_color: HexColor,
    params: MaterialParams,
    view_epoch: u64,
    switching: bool,
}

impl Selection {
    pub fn new(descriptor: &ModelDescriptor) -> Self {
        Self {
            active_id: descriptor.id.clone(),
            default_color: descriptor.color,
            params: MaterialParams::from_descriptor(descriptor, DEFAULT_BACKGROUND),
            view_epoch: 0,
            switching: false,
        }
    }

    /// Start on `id`, or on the first entry when `id` is missing or unknown.
    pub fn open(catalog: &Catalog, id: Option<&str>) -> GalleryResult<Self> {
        if let Some(id) = id {
            match catalog.require(id) {
                Ok(descriptor) => return Ok(Self::new(descriptor)),
                Err(e) => warn!(error = %e, "deep link falls back to first entry"),
            }
        }
        first_entry(catalog).map(Self::new)
    }

    pub fn active_id(&self) -> &str {
        &self.active_id
    }

    pub fn active<'c>(&self, catalog: &'c Catalog) -> GalleryResult<&'c ModelDescriptor> {
        catalog.require(&self.active_id)
    }

    pub fn params(&self) -> &MaterialParams {
        &self.params
    }

    pub fn view_epoch(&self) -> u64 {
        self.view_epoch
    }

    pub fn is_switching(&self) -> bool {
        self.switching
    }

    /// Make `id` active and reload its material defaults. The background
    /// survives the switch.
    pub fn select(&mut self, catalog: &Catalog, id: &str) -> GalleryResult<()> {
        let descriptor = catalog.require(id)?;
        info!(id, model = %descriptor.describe(), "select model");
        self.active_id = descriptor.id.clone();
        self.default_color = descriptor.color;
        self.params = MaterialParams::from_descriptor(descriptor, self.params.background);
        self.switching = true;
        Ok(())
    }

    /// Point at the entry a route names, `None` meaning the first entry.
    /// Returns whether the active model changed; following the model that
    /// is already active keeps its edits.
    pub fn follow(&mut self, catalog: &Catalog, id: Option<&str>) -> GalleryResult<bool> {
        let target = match id {
            Some(id) => catalog.require(id)?,
            None => first_entry(catalog)?,
        };
        if target.id == self.active_id {
            return Ok(false);
        }
        self.select(catalog, &target.id)?;
        Ok(true)
    }

    /// Apply one edit. Out-of-range coefficients are clamped; unparsable
    /// colors fall back to the descriptor color (or the default background).
    pub fn update_param(&mut self, update: ParamUpdate) {
        debug!(key = update.key(), ?update, "update param");
        match update {
            ParamUpdate::Color(raw) => {
                self.params.color = parse_or(&raw, self.default_color);
            }
            ParamUpdate::Background(raw) => {
                self.params.background = parse_or(&raw, DEFAULT_BACKGROUND);
            }
            ParamUpdate::Metalness(v) => {
                self.params.metalness = clamp_coefficient("metalness", v);
            }
            ParamUpdate::Roughness(v) => {
                self.params.roughness = clamp_coefficient("roughness", v);
            }
        }
    }

    /// Ask the viewer to re-frame and replay its entry without touching
    /// any parameter.
    pub fn reset_view(&mut self) {
        self.view_epoch = self.view_epoch.wrapping_add(1);
        debug!(epoch = self.view_epoch, "reset view");
    }

    /// Called by the viewer once the new scene is on screen.
    pub fn finish_switch(&mut self) {
        self.switching = false;
    }
}

fn first_entry(catalog: &Catalog) -> GalleryResult<&ModelDescriptor> {
    catalog.first().ok_or_else(|| GalleryError::UnknownModel("<empty catalog>".into()))
}

fn parse_or(raw: &str, fallback: HexColor) -> HexColor {
    HexColor::parse(raw).unwrap_or_else(|e| {
        warn!(error = %e, %fallback, "rejected color");
        fallback
    })
}

fn clamp_coefficient(key: &str, value: f32) -> Coefficient {
    if !Coefficient::accepts(value) {
        warn!(key, value, "clamped out-of-range coefficient");
    }
    Coefficient::clamped(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    fn catalog() -> Catalog {
        let a = ModelDescriptor::new("a", Category::Primitive, "box", "A", "🅰").with_material(
            HexColor::from_rgb(0x111111),
            Coefficient::new(0.1),
            Coefficient::new(0.9),
        );
        let b = ModelDescriptor::new("b", Category::Primitive, "sphere", "B", "🅱").with_material(
            HexColor::from_rgb(0x222222),
            Coefficient::new(0.7),
            Coefficient::new(0.3),
        );
        Catalog::new(vec![a, b])
    }

    #[test]
    fn select_resets_material_but_keeps_background() {
        let catalog = catalog();
        let mut s = Selection::open(&catalog, Some("a")).unwrap();
        s.update_param(ParamUpdate::Color("#ffffff".into()));
        s.update_param(ParamUpdate::Background("#000000".into()));
        assert_eq!(s.params().color, HexColor::WHITE);

        s.select(&catalog, "b").unwrap();
        assert_eq!(s.active_id(), "b");
        assert_eq!(s.params().color.to_string(), "#222222");
        assert_eq!(s.params().metalness.value(), 0.7);
        assert_eq!(s.params().roughness.value(), 0.3);
        assert_eq!(s.params().background, HexColor::BLACK);
        assert!(s.is_switching());
    }

    #[test]
    fn select_unknown_id_leaves_state_alone() {
        let catalog = catalog();
        let mut s = Selection::open(&catalog, None).unwrap();
        let before = s.clone();
        assert_eq!(s.select(&catalog, "zzz"), Err(GalleryError::UnknownModel("zzz".into())));
        assert_eq!(s, before);
    }

    #[test]
    fn coefficients_are_clamped() {
        let mut s = Selection::open(&catalog(), None).unwrap();
        s.update_param(ParamUpdate::Metalness(5.0));
        s.update_param(ParamUpdate::Roughness(-2.0));
        assert_eq!(s.params().metalness, Coefficient::ONE);
        assert_eq!(s.params().roughness, Coefficient::ZERO);
    }

    #[test]
    fn invalid_color_falls_back_to_descriptor_default() {
        let mut s = Selection::open(&catalog(), Some("b")).unwrap();
        s.update_param(ParamUpdate::Color("#ffffff".into()));
        s.update_param(ParamUpdate::Color("not a color".into()));
        assert_eq!(s.params().color, HexColor::from_rgb(0x222222));
        s.update_param(ParamUpdate::Background("#12".into()));
        assert_eq!(s.params().background, DEFAULT_BACKGROUND);
    }

    #[test]
    fn reset_view_only_bumps_epoch() {
        let mut s = Selection::open(&catalog(), Some("a")).unwrap();
        s.update_param(ParamUpdate::Metalness(0.5));
        let params = *s.params();
        s.reset_view();
        s.reset_view();
        assert_eq!(s.view_epoch(), 2);
        assert_eq!(*s.params(), params);
        assert_eq!(s.active_id(), "a");
    }

    #[test]
    fn open_falls_back_to_first_entry() {
        let catalog = catalog();
        assert_eq!(Selection::open(&catalog, Some("missing")).unwrap().active_id(), "a");
        assert!(Selection::open(&Catalog::new(Vec::new()), None).is_err());
    }

    #[test]
    fn following_the_active_id_keeps_edits() {
        let catalog = catalog();
        let mut s = Selection::open(&catalog, Some("b")).unwrap();
        s.update_param(ParamUpdate::Metalness(0.05));
        assert_eq!(s.follow(&catalog, Some("b")), Ok(false));
        assert_eq!(s.params().metalness.value(), 0.05);
        assert!(!s.is_switching());
    }

    #[test]
    fn following_home_returns_to_first_entry() {
        let catalog = catalog();
        let mut s = Selection::open(&catalog, Some("b")).unwrap();
        assert_eq!(s.follow(&catalog, None), Ok(true));
        assert_eq!(s.active_id(), "a");
        assert_eq!(s.params().color.to_string(), "#111111");
        assert_eq!(s.follow(&catalog, None), Ok(false));
    }

    #[test]
    fn following_unknown_id_keeps_current_model() {
        let catalog = catalog();
        let mut s = Selection::open(&catalog, Some("b")).unwrap();
        let before = s.clone();
        assert_eq!(s.follow(&catalog, Some("nope")), Err(GalleryError::UnknownModel("nope".into())));
        assert_eq!(s, before);
    }

    #[test]
    fn finish_switch_clears_marker() {
        let catalog = catalog();
        let mut s = Selection::open(&catalog, None).unwrap();
        s.select(&catalog, "b").unwrap();
        s.finish_switch();
        assert!(!s.is_switching());
    }
}
