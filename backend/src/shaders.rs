use super::error::{BackendError, Result};
use super::glutils::*;
use gl::{types::*, *};
use std::ffi::{CStr, CString};
use std::fs;
use std::path::Path;

/// A linked vertex + fragment program.
#[derive(Debug)]
pub struct Shaders {
    program_id: u32,
}

impl Shaders {
    pub fn from_files(vertex_file: impl AsRef<Path>, fragment_file: impl AsRef<Path>) -> Result<Shaders> {
        let vertex_code = read_source(vertex_file.as_ref())?;
        let fragment_code = read_source(fragment_file.as_ref())?;

        let shaders = Shaders::from_str(vertex_code.as_str(), fragment_code.as_str())?;
        log::info!(
            "compiled program {} from {:?} and {:?}",
            shaders.program_id,
            vertex_file.as_ref(),
            fragment_file.as_ref()
        );
        Ok(shaders)
    }

    pub fn from_str(vertex_code: &str, fragment_code: &str) -> Result<Shaders> {
        let vertex_shader = Self::compile(VERTEX_SHADER, "vertex", vertex_code)?;
        let fragment_shader = match Self::compile(FRAGMENT_SHADER, "fragment", fragment_code) {
            Ok(s) => s,
            Err(e) => {
                unsafe { gl::DeleteShader(vertex_shader) };
                return Err(e);
            }
        };

        // create program and link shaders
        let shader_program = unsafe { gl::CreateProgram() };
        unsafe { gl::AttachShader(shader_program, vertex_shader) };
        unsafe { gl::AttachShader(shader_program, fragment_shader) };
        unsafe { gl::LinkProgram(shader_program) };

        // not needed anymore
        unsafe { gl::DeleteShader(vertex_shader) };
        unsafe { gl::DeleteShader(fragment_shader) };

        let mut success = 0;
        unsafe {
            gl::GetProgramiv(shader_program, LINK_STATUS, &mut success);
        }
        if success == 0 {
            let mut v: Vec<u8> = Vec::with_capacity(1024);
            let mut log_len = 0_i32;
            unsafe {
                gl::GetProgramInfoLog(shader_program, 1024, &mut log_len, v.as_mut_ptr().cast());
                v.set_len(log_len.max(0) as usize);
                gl::DeleteProgram(shader_program);
            }
            return Err(BackendError::ProgramLink(
                String::from_utf8_lossy(&v).to_string(),
            ));
        }

        Ok(Shaders {
            program_id: shader_program,
        })
    }

    fn compile(kind: GLenum, stage: &'static str, shader_code: &str) -> Result<u32> {
        let shader_id = unsafe { gl::CreateShader(kind) };
        if shader_id == 0 {
            return Err(BackendError::ShaderCompile {
                stage,
                log: "gl::CreateShader failed".to_string(),
            });
        }

        unsafe {
            gl::ShaderSource(
                shader_id,
                1,
                &(shader_code.as_bytes().as_ptr().cast()),
                &(shader_code.len() as i32),
            );
        }

        unsafe { gl::CompileShader(shader_id) };

        // check if there are compilation errors
        let mut success = 0;
        unsafe {
            gl::GetShaderiv(shader_id, COMPILE_STATUS, &mut success);
        }

        if success == 0 {
            let mut v: Vec<u8> = Vec::with_capacity(1024);
            let mut log_len = 0_i32;
            unsafe {
                gl::GetShaderInfoLog(shader_id, 1024, &mut log_len, v.as_mut_ptr().cast());
                v.set_len(log_len.max(0) as usize);
                gl::DeleteShader(shader_id);
            }

            return Err(BackendError::ShaderCompile {
                stage,
                log: String::from_utf8_lossy(&v).to_string(),
            });
        }
        Ok(shader_id)
    }

    pub fn program_id(&self) -> u32 {
        self.program_id
    }

    fn get_uniform_location(&self, name: &str) -> Result<i32> {
        let c_name = to_cstring(name);
        self.get_uniform_location_cstr(&c_name)
    }

    fn get_uniform_location_cstr(&self, c_name: &CStr) -> Result<i32> {
        let location = unsafe { gl::GetUniformLocation(self.program_id, c_name.as_ptr().cast()) };
        check_gl_err()?;
        if location == -1 {
            return Err(BackendError::MissingLocation {
                program: self.program_id,
                name: c_name.to_string_lossy().into_owned(),
                kind: "uniform",
            });
        }
        Ok(location)
    }

    /// Location of a vertex attribute, e.g. `position` or `texCoord`.
    pub fn attrib_location(&self, name: &str) -> Result<u32> {
        let c_name = to_cstring(name);
        let location = unsafe { gl::GetAttribLocation(self.program_id, c_name.as_ptr().cast()) };
        if location < 0 {
            return Err(BackendError::MissingLocation {
                program: self.program_id,
                name: name.to_string(),
                kind: "attribute",
            });
        }
        Ok(location as u32)
    }

    pub fn use_program(&self) -> Result<()> {
        unsafe { gl::UseProgram(self.program_id) };
        check_gl_err()
    }

    pub fn set_i32(&self, name: &str, value: i32) -> Result<()> {
        unsafe { gl::Uniform1i(self.get_uniform_location(name)?, value) };
        Ok(())
    }

    /// Uploads `mat` column-major, as glam stores it.
    pub fn set_mat4fv(&self, name: &str, mat: &glam::Mat4) -> Result<()> {
        let location = self.get_uniform_location(name)?;
        let arr = mat.to_cols_array();
        unsafe { gl::UniformMatrix4fv(location, 1, FALSE, arr.as_ptr()) };
        Ok(())
    }
}

impl Drop for Shaders {
    fn drop(&mut self) {
        unsafe { gl::DeleteProgram(self.program_id) };
    }
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| BackendError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn to_cstring(name: &str) -> CString {
    // identifiers never carry interior NULs; strip them instead of failing
    CString::new(name.replace('\0', "")).unwrap_or_default()
}
