//! Viewer - resolves the active model and keeps the surface in sync

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::{debug, warn};

use super::surface::{self, SURFACE_ID, SurfaceView};
use crate::catalog::Catalog;
use crate::config::{FRAME_STEP_MS, ViewerConfig};
use crate::primitives::{IdleMotion, MotionRole};
use crate::scene::{SceneDescription, resolve, resolve_with};
use crate::state::{MaterialParams, Selection};

/// What the last push showed; a push with the same key is skipped.
type PushKey = (String, MaterialParams, u64);

/// Jitter seed of the current view epoch. Epoch 0 resolves from the id
/// seed; each later epoch draws once and keeps that seed, so parameter
/// edits after a reset do not re-roll the layout.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct EpochSeed {
    epoch: u64,
    seed: Option<u64>,
}

impl EpochSeed {
    fn for_epoch(&mut self, epoch: u64, draw: impl FnOnce() -> Option<u64>) -> Option<u64> {
        if epoch == 0 {
            return None;
        }
        if self.epoch != epoch || self.seed.is_none() {
            self.epoch = epoch;
            self.seed = draw();
        }
        self.seed
    }
}

/// Fresh entropy for a re-rolled view. `None` when the platform has none,
/// in which case the id-seeded resolve is used.
fn fresh_seed() -> Option<u64> {
    let mut buf = [0u8; 8];
    getrandom::fill(&mut buf).ok()?;
    Some(u64::from_le_bytes(buf))
}

fn now_secs() -> f32 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| (p.now() / 1000.0) as f32)
        .unwrap_or(0.0)
}

#[component]
pub fn Viewer(selection: Signal<Selection>) -> Element {
    let mut last_push = use_signal(|| None::<PushKey>);
    let mut epoch_seed = use_signal(EpochSeed::default);

    // Idle motion: one pose per frame step, forever
    use_hook(|| {
        spawn(async move {
            let motion = IdleMotion::GALLERY;
            let start = now_secs();
            loop {
                TimeoutFuture::new(FRAME_STEP_MS).await;
                surface::pose(&motion.role_pose(MotionRole::IdleFloat, now_secs() - start));
            }
        });
    });

    // Re-resolve and push whenever the model, a parameter or the view epoch changes
    use_effect(move || {
        let current = selection.read();
        let key: PushKey = (current.active_id().to_string(), *current.params(), current.view_epoch());
        let descriptor = match current.active(Catalog::builtin()) {
            Ok(d) => d,
            Err(e) => {
                warn!(error = %e, "active model missing from catalog");
                return;
            }
        };
        if last_push.peek().as_ref() == Some(&key) {
            return;
        }
        let params = *current.params();
        let epoch = current.view_epoch();
        drop(current);

        let seed = epoch_seed.write().for_epoch(epoch, fresh_seed);
        let scene: SceneDescription = match seed {
            None => resolve(descriptor, &params),
            Some(seed) => resolve_with(descriptor, &params, &mut SmallRng::seed_from_u64(seed)),
        };
        debug!(id = %key.0, nodes = scene.node_count(), meshes = scene.meshes().len(), epoch, "push scene");
        last_push.set(Some(key));

        spawn(async move {
            let mut selection = selection;
            let view = SurfaceView {
                config: ViewerConfig::GALLERY,
                background: params.background,
                epoch,
            };
            if let Err(e) = surface::push(&scene, &view).await {
                warn!(error = %e, "surface push failed");
            }
            if selection.peek().is_switching() {
                selection.write().finish_switch();
            }
        });
    });

    let switching = selection.read().is_switching();
    let background = selection.read().params().background;
    let ink = background.ink();

    rsx! {
        div {
            style: "position: relative; width: 100%; height: 100%; border-radius: 2.5rem; overflow: hidden; background: {background};",
            div {
                id: SURFACE_ID,
                style: "position: absolute; inset: 0;",
            }
            if switching {
                div {
                    style: "position: absolute; top: 24px; left: 50%; transform: translateX(-50%); padding: 6px 16px; border-radius: 999px; border: 1px solid {ink}; color: {ink}; opacity: 0.6; font-size: 12px; font-weight: 700; letter-spacing: 0.1em;",
                    "LOADING"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_epoch_never_draws() {
        let mut seeds = EpochSeed::default();
        assert_eq!(seeds.for_epoch(0, || panic!("no draw at epoch 0")), None);
    }

    #[test]
    fn edits_within_an_epoch_keep_its_seed() {
        let mut seeds = EpochSeed::default();
        let mut draws = 0;
        let mut draw = |value| {
            draws += 1;
            Some(value)
        };
        assert_eq!(seeds.for_epoch(1, || draw(11)), Some(11));
        assert_eq!(seeds.for_epoch(1, || draw(22)), Some(11));
        assert_eq!(seeds.for_epoch(1, || draw(33)), Some(11));
        assert_eq!(draws, 1);
    }

    #[test]
    fn each_reset_draws_again() {
        let mut seeds = EpochSeed::default();
        assert_eq!(seeds.for_epoch(1, || Some(5)), Some(5));
        assert_eq!(seeds.for_epoch(2, || Some(9)), Some(9));
        assert_eq!(seeds.for_epoch(2, || Some(1)), Some(9));
    }

    #[test]
    fn missing_entropy_retries_next_push() {
        let mut seeds = EpochSeed::default();
        assert_eq!(seeds.for_epoch(3, || None), None);
        assert_eq!(seeds.for_epoch(3, || Some(4)), Some(4));
    }
}
