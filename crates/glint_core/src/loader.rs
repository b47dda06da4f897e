//! Scene file parser.
//!
//! The format is whitespace-separated text:
//!
//! ```text
//! <recursion_depth> <image_pixels>
//! <object_count>
//!   sphere   <cx cy cz> <radius> <r g b> <ka kd ks kr> <shine>
//!   triangle <x y z> x3 <r g b> <ka kd ks kr> <shine>
//!   general  <A B C D E F G H I J> <ref xyz> <len wid hgt>
//!            <r g b> <ka kd ks kr> <shine>
//! <point_light_count>
//!   <px py pz> <r g b>
//! <spot_light_count>
//!   <px py pz> <r g b> <dx dy dz> <cutoff_degrees>
//! ```
//!
//! The loader validates structure; downstream code trusts its output.

use std::fs;
use std::path::Path;
use std::str::SplitWhitespace;

use glint_math::DVec3;
use thiserror::Error;

use crate::light::{PointLight, SpotLight};
use crate::material::Material;
use crate::scene::{ObjectDesc, SceneDesc, ShapeDesc};

/// Errors that can occur while reading a scene file.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unexpected end of scene description")]
    UnexpectedEof,

    #[error("invalid number: {0:?}")]
    InvalidNumber(String),

    #[error("unknown shape type: {0:?}")]
    UnknownShape(String),
}

pub type SceneResult<T> = Result<T, SceneError>;

/// Load and parse a scene file.
pub fn load_scene(path: impl AsRef<Path>) -> SceneResult<SceneDesc> {
    parse_scene(&fs::read_to_string(path)?)
}

/// Parse a scene description from text.
pub fn parse_scene(content: &str) -> SceneResult<SceneDesc> {
    let mut tokens = Tokens::new(content);
    let mut desc = SceneDesc {
        recursion_depth: tokens.next_u32()?,
        image_size: tokens.next_u32()?,
        ..SceneDesc::default()
    };

    let object_count = tokens.next_u32()?;
    for _ in 0..object_count {
        desc.objects.push(read_object(&mut tokens)?);
    }

    let point_light_count = tokens.next_u32()?;
    for _ in 0..point_light_count {
        let position = tokens.next_vec3()?;
        let color = tokens.next_vec3()?;
        desc.point_lights.push(PointLight::new(position, color));
    }

    let spot_light_count = tokens.next_u32()?;
    for _ in 0..spot_light_count {
        let position = tokens.next_vec3()?;
        let color = tokens.next_vec3()?;
        let direction = tokens.next_vec3()?;
        let cutoff = tokens.next_f64()?;
        desc.spot_lights
            .push(SpotLight::new(PointLight::new(position, color), direction, cutoff));
    }

    Ok(desc)
}

fn read_object(tokens: &mut Tokens<'_>) -> SceneResult<ObjectDesc> {
    let tag = tokens.next_token()?;
    let shape = match tag {
        "sphere" => ShapeDesc::Sphere {
            center: tokens.next_vec3()?,
            radius: tokens.next_f64()?,
        },
        "triangle" => ShapeDesc::Triangle {
            a: tokens.next_vec3()?,
            b: tokens.next_vec3()?,
            c: tokens.next_vec3()?,
        },
        "general" => {
            let mut coeffs = [0.0; 10];
            for coeff in &mut coeffs {
                *coeff = tokens.next_f64()?;
            }
            ShapeDesc::General {
                coeffs,
                clip_origin: tokens.next_vec3()?,
                // length/width/height bound x/y/z respectively
                clip_extent: tokens.next_vec3()?,
            }
        }
        other => return Err(SceneError::UnknownShape(other.to_string())),
    };

    let material = read_material(tokens)?;
    Ok(ObjectDesc { shape, material })
}

fn read_material(tokens: &mut Tokens<'_>) -> SceneResult<Material> {
    let color = tokens.next_vec3()?;
    let mut weights = [0.0; 4];
    for weight in &mut weights {
        *weight = tokens.next_f64()?;
    }
    let shine = tokens.next_f64()?;
    Ok(Material::new(color, weights, shine))
}

/// Whitespace token stream over the scene text.
struct Tokens<'a> {
    iter: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(content: &'a str) -> Self {
        Self {
            iter: content.split_whitespace(),
        }
    }

    fn next_token(&mut self) -> SceneResult<&'a str> {
        self.iter.next().ok_or(SceneError::UnexpectedEof)
    }

    fn next_f64(&mut self) -> SceneResult<f64> {
        let token = self.next_token()?;
        token
            .parse()
            .map_err(|_| SceneError::InvalidNumber(token.to_string()))
    }

    fn next_u32(&mut self) -> SceneResult<u32> {
        let token = self.next_token()?;
        token
            .parse()
            .map_err(|_| SceneError::InvalidNumber(token.to_string()))
    }

    fn next_vec3(&mut self) -> SceneResult<DVec3> {
        Ok(DVec3::new(
            self.next_f64()?,
            self.next_f64()?,
            self.next_f64()?,
        ))
    }
}
