use super::error::{BackendError, Result};
use gl::{types::*, *};
use std::path::Path;

pub fn check_gl_err() -> Result<()> {
    let err = unsafe { gl::GetError() };
    if err == gl::NO_ERROR {
        return Ok(());
    }
    Err(BackendError::Gl(err))
}

pub fn log_opengl_info() {
    let mut mtu: i32 = 0;
    unsafe { gl::GetIntegerv(MAX_TEXTURE_IMAGE_UNITS, &mut mtu) };
    log::debug!("MAX_TEXTURE_IMAGE_UNITS = {}", mtu);

    unsafe { gl::GetIntegerv(MAX_COMBINED_TEXTURE_IMAGE_UNITS, &mut mtu) };
    log::debug!("MAX_COMBINED_TEXTURE_IMAGE_UNITS = {}", mtu);

    let version = unsafe { gl::GetString(VERSION) };
    if !version.is_null() {
        let version = unsafe { std::ffi::CStr::from_ptr(version.cast()) };
        log::info!("OpenGL {}", version.to_string_lossy());
    }
}

pub fn gl_buffer_data_arr_stat<T: Sized>(buffer: &[T]) {
    unsafe {
        gl::BufferData(
            ARRAY_BUFFER,
            std::mem::size_of_val(buffer) as isize,
            buffer.as_ptr().cast(),
            STATIC_DRAW,
        )
    };
}

/// `stride` and `pointer` are counted in floats.
pub fn gl_vertex_attrib_ptr_enab(index: u32, size: u32, stride: u32, pointer: usize) {
    unsafe {
        gl::VertexAttribPointer(
            index,
            size as i32,
            FLOAT,
            FALSE,
            (stride as usize * std::mem::size_of::<f32>()) as i32,
            (pointer * std::mem::size_of::<f32>()) as *const _,
        )
    };
    unsafe { gl::EnableVertexAttribArray(index) };
}

/// A 2D texture owned by the current GL context.
#[derive(Debug)]
pub struct Texture {
    id: u32,
    pub width: usize,
    pub height: usize,
}

impl Texture {
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn bind(&self) {
        unsafe { gl::BindTexture(TEXTURE_2D, self.id) };
    }
}

impl Drop for Texture {
    fn drop(&mut self) {
        unsafe { gl::DeleteTextures(1, &self.id) };
    }
}

/// Pixel-art friendly defaults: nearest filtering, clamped edges.
pub const SPRITE_TEXTURE_PARAMS: [(GLenum, GLenum, GLenum); 4] = [
    (TEXTURE_2D, TEXTURE_WRAP_S, CLAMP_TO_EDGE),
    (TEXTURE_2D, TEXTURE_WRAP_T, CLAMP_TO_EDGE),
    (TEXTURE_2D, TEXTURE_MIN_FILTER, NEAREST),
    (TEXTURE_2D, TEXTURE_MAG_FILTER, NEAREST),
];

pub fn load_texture(filename: impl AsRef<Path>) -> Result<Texture> {
    load_texture_params(filename, &SPRITE_TEXTURE_PARAMS)
}

/// Decodes an image into an RGBA `TEXTURE_2D`.
///
/// Images are decoded top row first, which matches the quad's texture
/// coordinates (v = 0 at the top edge).
pub fn load_texture_params(
    filename: impl AsRef<Path>,
    params: &[(GLenum, GLenum, GLenum)],
) -> Result<Texture> {
    let path = filename.as_ref();
    let image_err = |reason: String| BackendError::Image {
        path: path.to_path_buf(),
        reason,
    };

    unsafe {
        stb_image::stb_image::stbi_set_flip_vertically_on_load(0);
    }
    let img = match stb_image::image::load_with_depth(path, 4, false) {
        stb_image::image::LoadResult::ImageF32(_) => {
            return Err(image_err("32-bit images not supported here".to_string()));
        }
        stb_image::image::LoadResult::ImageU8(img) => img,
        stb_image::image::LoadResult::Error(e) => return Err(image_err(e)),
    };

    let mut texture = Texture {
        id: 0,
        width: img.width,
        height: img.height,
    };
    unsafe { gl::GenTextures(1, &mut texture.id) };
    texture.bind();

    for (t, n, p) in params {
        unsafe { gl::TexParameteri(*t, *n, *p as i32) };
    }

    unsafe {
        gl::TexImage2D(
            TEXTURE_2D,
            0,
            RGBA as i32,
            img.width as i32,
            img.height as i32,
            0,
            RGBA,
            UNSIGNED_BYTE,
            img.data.as_ptr().cast(),
        )
    };
    check_gl_err()?;

    log::info!(
        "loaded texture {:?} ({}x{}) as id {}",
        path,
        texture.width,
        texture.height,
        texture.id
    );
    Ok(texture)
}
