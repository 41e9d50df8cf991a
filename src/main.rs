//! SDF Marcher native driver
//!
//! Stands in for the canvas layer: picks an origin, traces one frame (a full
//! fan plus a pointer-directed ray with its step circles) and prints the
//! result as JSON.
//!
//! Usage: `sdf-marcher [settings.json] [scene.json]`

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use glam::Vec2;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;
    use serde::Serialize;

    use sdf_marcher::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};
    use sdf_marcher::trace::StepCircle;
    use sdf_marcher::{
        MarchError, MarchSettings, Ray, Scene, StepRecorder, TraceResult, march, march_fan,
    };

    /// Everything a renderer needs to draw one frame
    #[derive(Debug, Serialize)]
    struct Frame {
        origin: Vec2,
        target: Vec2,
        fan_rays: usize,
        fan_hits: usize,
        fan_endpoints: Vec<Vec2>,
        pointer_ray: Option<TraceResult>,
        step_circles: Vec<StepCircle>,
    }

    /// Random origin on the canvas, as the sketch did on every mode switch
    fn random_origin(rng: &mut Pcg32) -> Vec2 {
        Vec2::new(
            rng.random_range(0.0..CANVAS_WIDTH),
            rng.random_range(0.0..CANVAS_HEIGHT),
        )
    }

    fn trace_frame(scene: &Scene, settings: &MarchSettings) -> Result<Frame, MarchError> {
        let mut rng = Pcg32::seed_from_u64(settings.seed);
        let origin = random_origin(&mut rng);
        let target = Vec2::new(CANVAS_WIDTH, CANVAS_HEIGHT) * 0.5;
        log::info!("Tracing frame from origin {} toward {}", origin, target);

        let fan = march_fan(scene, origin, settings)?;

        let mut recorder = StepRecorder::new();
        let pointer_ray = match Ray::towards(origin, target) {
            Some(ray) => match march(scene, ray, settings, &mut recorder) {
                Ok(result) => Some(result),
                Err(MarchError::DegenerateNormal { point }) => {
                    log::warn!("No normal at {}, tracing without one", point);
                    recorder = StepRecorder::new();
                    let plain = settings.clone().without_normal();
                    Some(march(scene, ray, &plain, &mut recorder)?)
                }
                Err(e) => return Err(e),
            },
            None => {
                log::warn!("Pointer is on the origin, skipping pointer ray");
                None
            }
        };

        Ok(Frame {
            origin,
            target,
            fan_rays: fan.len(),
            fan_hits: fan.iter().filter(|r| r.is_hit()).count(),
            fan_endpoints: fan.iter().map(|r| r.hit_point).collect(),
            pointer_ray,
            step_circles: recorder.circles,
        })
    }

    fn run() -> Result<(), MarchError> {
        let mut args = std::env::args().skip(1);

        let settings = match args.next() {
            Some(path) => MarchSettings::load(path)?,
            None => {
                log::info!("Using default settings");
                MarchSettings::default()
            }
        };
        let scene = match args.next() {
            Some(path) => Scene::load(path)?,
            None => Scene::showcase(),
        };

        let frame = trace_frame(&scene, &settings)?;
        log::info!(
            "Fan: {}/{} rays hit, pointer ray steps: {}",
            frame.fan_hits,
            frame.fan_rays,
            frame.step_circles.len()
        );
        println!("{}", serde_json::to_string_pretty(&frame)?);
        Ok(())
    }


    pub fn main() {
        env_logger::init();
        log::info!("SDF Marcher (native) starting...");

        if let Err(e) = run() {
            log::error!("{e}");
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    native::main();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No canvas layer on wasm; the library is used directly
}
