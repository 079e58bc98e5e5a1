//! Surface - bridge to the browser-side WebGL renderer
//!
//! The renderer lives in JS (installed once from `App`) and only knows how
//! to turn a serialized scene into three.js objects. Rust decides what to
//! show, when to re-frame the camera and which pose to apply each frame.

use dioxus::prelude::*;
use serde::Serialize;
use tracing::warn;

use crate::config::ViewerConfig;
use crate::error::{GalleryError, GalleryResult};
use crate::primitives::{HexColor, Pose};
use crate::scene::SceneDescription;

/// Element the renderer attaches its canvas to
pub const SURFACE_ID: &str = "gallery-surface";

/// Stage settings sent alongside each scene
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceView {
    pub config: ViewerConfig,
    pub background: HexColor,
    /// Camera is re-framed whenever this changes
    pub epoch: u64,
}

/// Replace the displayed model.
pub async fn push(scene: &SceneDescription, view: &SurfaceView) -> GalleryResult<()> {
    let scene = scene.to_json().map_err(|e| GalleryError::Surface(e.to_string()))?;
    let view = serde_json::to_string(view).map_err(|e| GalleryError::Surface(e.to_string()))?;
    call("push", &format!("{scene}, {view}")).await
}

/// Apply one idle-motion pose to the animated root.
pub fn pose(pose: &Pose) {
    match serde_json::to_string(pose) {
        Ok(json) => {
            document::eval(&format!("window.__gallerySurface && window.__gallerySurface.pose({json});"));
        }
        Err(e) => warn!(error = %e, "pose not serializable"),
    }
}

/// `args` is spliced into the call verbatim and must already be JS literals.
async fn call(method: &str, args: &str) -> GalleryResult<()> {
    let script = format!(
        r#"
        if (!window.__gallerySurface) return "surface not installed";
        try {{ await window.__gallerySurface.{method}({args}); return null; }}
        catch (e) {{ return String(e); }}
        "#
    );
    match document::eval(&script).join::<Option<String>>().await {
        Ok(None) => Ok(()),
        Ok(Some(reason)) => Err(GalleryError::Surface(reason)),
        Err(e) => Err(GalleryError::Surface(e.to_string())),
    }
}

/// Install the renderer. Idempotent.
pub fn install() {
    document::eval(SURFACE_JS);
}

const SURFACE_JS: &str = r#"
if (!window.__gallerySurface) {
    const THREE_URL = 'https://esm.sh/three@0.160.0';
    const CONTROLS_URL = 'https://esm.sh/three@0.160.0/examples/jsm/controls/OrbitControls.js';
    const lib = Promise.all([import(THREE_URL), import(CONTROLS_URL)])
        .then(([THREE, c]) => ({ THREE, OrbitControls: c.OrbitControls }));

    const s = { ctx: null, root: null, rest: null, epoch: -1 };

    const geometry = (THREE, g) => {
        switch (g.kind) {
            case 'box': return new THREE.BoxGeometry(g.width, g.height, g.depth);
            case 'sphere': return new THREE.SphereGeometry(g.radius, g.widthSegments, g.heightSegments);
            case 'cylinder': return new THREE.CylinderGeometry(g.radiusTop, g.radiusBottom, g.height, g.radialSegments);
            case 'cone': return new THREE.ConeGeometry(g.radius, g.height, g.radialSegments);
            case 'capsule': return new THREE.CapsuleGeometry(g.radius, g.length, 8, 16);
            case 'torus': return new THREE.TorusGeometry(g.radius, g.tube, g.radialSegments, g.tubularSegments, g.arc);
            case 'torusKnot': return new THREE.TorusKnotGeometry(g.radius, g.tube, g.tubularSegments, g.radialSegments, g.p, g.q);
            case 'tetrahedron': return new THREE.TetrahedronGeometry(g.radius, g.detail);
            case 'octahedron': return new THREE.OctahedronGeometry(g.radius, g.detail);
            case 'icosahedron': return new THREE.IcosahedronGeometry(g.radius, g.detail);
            case 'dodecahedron': return new THREE.DodecahedronGeometry(g.radius, g.detail);
            case 'plane': return new THREE.PlaneGeometry(g.width, g.height);
            case 'circle': return new THREE.CircleGeometry(g.radius, g.segments);
            case 'ring': return new THREE.RingGeometry(g.innerRadius, g.outerRadius, g.segments);
            case 'lathe': return new THREE.LatheGeometry(g.points.map(([x, y]) => new THREE.Vector2(x, y)), g.segments);
            case 'extrude': {
                const shape = new THREE.Shape(g.outline.map(([x, y]) => new THREE.Vector2(x, y)));
                const geo = new THREE.ExtrudeGeometry(shape, {
                    depth: g.depth, bevelEnabled: g.bevel > 0, bevelSize: g.bevel, bevelThickness: g.bevel,
                });
                geo.center();
                return geo;
            }
            default: throw new Error('unknown geometry kind: ' + g.kind);
        }
    };

    const place = (obj, t) => {
        obj.position.fromArray(t.position);
        obj.rotation.set(t.rotation[0], t.rotation[1], t.rotation[2]);
        obj.scale.fromArray(t.scale);
    };

    const build = (THREE, node) => {
        if (node.node === 'mesh') {
            const m = node.material;
            const material = new THREE.MeshStandardMaterial({
                color: m.color, metalness: m.metalness, roughness: m.roughness,
                transparent: m.opacity < 1, opacity: m.opacity,
                side: node.doubleSided ? THREE.DoubleSide : THREE.FrontSide,
            });
            if (m.emissive) {
                material.emissive = new THREE.Color(m.emissive);
                material.emissiveIntensity = m.emissiveIntensity;
            }
            const mesh = new THREE.Mesh(geometry(THREE, node.geometry), material);
            mesh.castShadow = node.castShadow;
            mesh.receiveShadow = true;
            place(mesh, node.transform);
            return mesh;
        }
        const group = new THREE.Group();
        place(group, node.transform);
        for (const child of node.children) group.add(build(THREE, child));
        if (node.motion === 'idle-float' && !s.root) {
            s.root = group;
            s.rest = { position: group.position.clone(), rotation: group.rotation.clone() };
        }
        return group;
    };

    const dispose = (obj) => obj.traverse((o) => {
        if (o.geometry) o.geometry.dispose();
        if (o.material) o.material.dispose();
    });

    const mount = ({ THREE, OrbitControls }) => {
        const el = document.getElementById('gallery-surface');
        if (!el) throw new Error('surface element missing');
        const renderer = new THREE.WebGLRenderer({ antialias: true });
        renderer.setPixelRatio(window.devicePixelRatio);
        renderer.shadowMap.enabled = true;
        renderer.shadowMap.type = THREE.PCFSoftShadowMap;
        el.appendChild(renderer.domElement);

        const scene = new THREE.Scene();
        const camera = new THREE.PerspectiveCamera(24, 1, 0.1, 200);
        const controls = new OrbitControls(camera, renderer.domElement);
        controls.enableDamping = true;

        const hemi = new THREE.HemisphereLight(0xffffff, 0xb8b9be, 1);
        const sun = new THREE.DirectionalLight(0xffffff, 1);
        sun.position.set(5, 10, 5);
        sun.castShadow = true;
        sun.shadow.mapSize.set(1024, 1024);
        const floor = new THREE.Mesh(new THREE.PlaneGeometry(40, 40), new THREE.ShadowMaterial({ opacity: 0.25 }));
        floor.rotation.x = -Math.PI / 2;
        floor.receiveShadow = true;
        scene.add(hemi, sun, floor);

        const resize = () => {
            const w = el.clientWidth || 1, h = el.clientHeight || 1;
            renderer.setSize(w, h, false);
            renderer.domElement.style.width = '100%';
            renderer.domElement.style.height = '100%';
            camera.aspect = w / h;
            camera.updateProjectionMatrix();
        };
        new ResizeObserver(resize).observe(el);
        resize();

        const loop = () => {
            controls.update();
            renderer.render(scene, camera);
            requestAnimationFrame(loop);
        };
        requestAnimationFrame(loop);
        return { canvas: renderer.domElement, scene, camera, controls, hemi, sun, floor, model: null };
    };

    const frame = (ctx, cfg) => {
        ctx.camera.fov = cfg.fov;
        ctx.camera.position.fromArray(cfg.cameraPosition);
        ctx.camera.updateProjectionMatrix();
        ctx.controls.target.set(0, 0, 0);
        ctx.controls.minPolarAngle = cfg.minPolarAngle;
        ctx.controls.maxPolarAngle = cfg.maxPolarAngle;
        ctx.controls.enablePan = cfg.enablePan;
        ctx.controls.update();
        ctx.hemi.intensity = cfg.stageIntensity * 2;
        ctx.sun.intensity = cfg.stageIntensity * 3;
        ctx.floor.position.y = cfg.contactShadowY;
    };

    window.__gallerySurface = {
        async push(scene, view) {
            const l = await lib;
            if (!s.ctx || !document.body.contains(s.ctx.canvas)) {
                s.ctx = mount(l);
                s.epoch = -1;
            }
            const ctx = s.ctx;
            if (ctx.model) {
                ctx.scene.remove(ctx.model);
                dispose(ctx.model);
            }
            s.root = null;
            ctx.model = build(l.THREE, scene.root);
            ctx.scene.add(ctx.model);
            ctx.scene.background = new l.THREE.Color(view.background);
            if (view.epoch !== s.epoch) {
                frame(ctx, view.config);
                s.epoch = view.epoch;
            }
        },
        pose(p) {
            if (!s.root || !s.rest) return;
            s.root.position.set(
                s.rest.position.x + p.offset[0],
                s.rest.position.y + p.offset[1],
                s.rest.position.z + p.offset[2],
            );
            s.root.rotation.set(
                s.rest.rotation.x + p.rotation[0],
                s.rest.rotation.y + p.rotation[1],
                s.rest.rotation.z + p.rotation[2],
            );
        },
    };
}
"#;
