//! Render a scene file to a PPM image.
//!
//! Usage: cargo run --example render_scene -- [scene.txt] [texture.jpg]

use std::fs::File;
use std::io::{BufWriter, Write};
use std::sync::Arc;

use glint_core::{load_scene, Texture};
use glint_math::DVec3;
use glint_renderer::{render, Camera, ImageBuffer, Scene};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let scene_path = args.next().unwrap_or_else(|| "scene.txt".to_string());
    let texture_path = args.next();

    let desc = load_scene(&scene_path).expect("failed to load scene");
    println!(
        "loaded {}: {} objects, {} point lights, {} spot lights",
        scene_path,
        desc.objects.len(),
        desc.point_lights.len(),
        desc.spot_lights.len()
    );

    let mut scene = Scene::from_desc(&desc);
    // The floor is part of every scene, after the file's own objects
    scene.add_floor(1000.0, 20.0);
    if let Some(path) = texture_path {
        match Texture::load(&path) {
            Ok(tex) => scene.texture = Some(Arc::new(tex)),
            Err(err) => {
                log::warn!("could not load floor texture {path}: {err}; using checkerboard")
            }
        }
    }

    let camera = Camera::look_at(DVec3::new(100.0, 100.0, 50.0), DVec3::ZERO, DVec3::Z)
        .with_resolution(desc.image_size);

    println!("rendering {0}x{0}...", desc.image_size);
    let start = std::time::Instant::now();
    let image = render(&scene, &camera);
    println!("rendered in {:?}", start.elapsed());

    save_ppm(&image, "output.ppm").expect("failed to save image");
    println!("saved to output.ppm");
}

fn save_ppm(image: &ImageBuffer, path: &str) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    writeln!(out, "P6\n{} {}\n255", image.width, image.height)?;
    out.write_all(&image.to_rgb())?;
    Ok(())
}
