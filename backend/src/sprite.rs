//! Textured unit-quad renderer.
//!
//! Every sprite is the same quad, centred on the origin with side 1, placed
//! on screen by its model matrix. The program must expose `position` and
//! `texCoord` attributes and `modelMatrix`, `viewMatrix`, `projectionMatrix`
//! and `diffuse` uniforms.

use super::error::Result;
use super::glutils::*;
use super::shaders::Shaders;
use glam::Mat4;

const MODEL_MATRIX: &str = "modelMatrix";
const VIEW_MATRIX: &str = "viewMatrix";
const PROJECTION_MATRIX: &str = "projectionMatrix";
const DIFFUSE: &str = "diffuse";

// x, y, u, v; two triangles
#[rustfmt::skip]
const QUAD: [f32; 24] = [
    -0.5, -0.5, 0.0, 1.0,
     0.5, -0.5, 1.0, 1.0,
     0.5,  0.5, 1.0, 0.0,
    -0.5, -0.5, 0.0, 1.0,
     0.5,  0.5, 1.0, 0.0,
    -0.5,  0.5, 0.0, 0.0,
];
const FLOATS_PER_VERTEX: u32 = 4;
const VERTEX_COUNT: i32 = (QUAD.len() / FLOATS_PER_VERTEX as usize) as i32;

pub struct SpriteRenderer {
    shaders: Shaders,
    vao: u32,
    vbo: u32,
}

impl SpriteRenderer {
    pub fn new(shaders: Shaders) -> Result<SpriteRenderer> {
        let position = shaders.attrib_location("position")?;
        let tex_coord = shaders.attrib_location("texCoord")?;

        let mut vao = 0;
        let mut vbo = 0;
        unsafe {
            gl::GenVertexArrays(1, &mut vao);
            gl::GenBuffers(1, &mut vbo);
            gl::BindVertexArray(vao);
            gl::BindBuffer(gl::ARRAY_BUFFER, vbo);
        }
        gl_buffer_data_arr_stat(&QUAD);
        gl_vertex_attrib_ptr_enab(position, 2, FLOATS_PER_VERTEX, 0);
        gl_vertex_attrib_ptr_enab(tex_coord, 2, FLOATS_PER_VERTEX, 2);
        unsafe { gl::BindVertexArray(0) };
        let renderer = SpriteRenderer { shaders, vao, vbo };
        check_gl_err()?;

        renderer.shaders.use_program()?;
        renderer.shaders.set_i32(DIFFUSE, 0)?;
        Ok(renderer)
    }

    pub fn set_camera(&self, view: &Mat4, projection: &Mat4) -> Result<()> {
        self.shaders.use_program()?;
        self.shaders.set_mat4fv(VIEW_MATRIX, view)?;
        self.shaders.set_mat4fv(PROJECTION_MATRIX, projection)
    }

    /// Draws `texture` on the unit quad transformed by `model`.
    pub fn draw(&self, texture: &Texture, model: &Mat4) -> Result<()> {
        self.shaders.use_program()?;
        self.shaders.set_mat4fv(MODEL_MATRIX, model)?;
        unsafe {
            gl::ActiveTexture(gl::TEXTURE0);
        }
        texture.bind();
        unsafe {
            gl::BindVertexArray(self.vao);
            gl::DrawArrays(gl::TRIANGLES, 0, VERTEX_COUNT);
            gl::BindVertexArray(0);
        }
        Ok(())
    }
}

impl Drop for SpriteRenderer {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteBuffers(1, &self.vbo);
            gl::DeleteVertexArrays(1, &self.vao);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec2, Vec3};

    fn corners() -> Vec<(Vec2, Vec2)> {
        QUAD.chunks(FLOATS_PER_VERTEX as usize)
            .map(|v| (Vec2::new(v[0], v[1]), Vec2::new(v[2], v[3])))
            .collect()
    }

    #[test]
    fn quad_is_two_triangles_of_unit_side() {
        assert_eq!(VERTEX_COUNT, 6);
        for (pos, _) in corners() {
            assert_eq!(pos.abs(), Vec2::splat(0.5));
        }
    }

    #[test]
    fn top_edge_samples_first_image_row() {
        for (pos, uv) in corners() {
            assert_eq!(uv.x, pos.x + 0.5);
            assert_eq!(uv.y, 0.5 - pos.y);
        }
    }

    #[test]
    fn model_matrix_upload_is_column_major() {
        let m = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(&m.to_cols_array()[12..15], &[1.0, 2.0, 3.0]);
    }
}
