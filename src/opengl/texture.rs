use super::{check_errors, OpenGLObject};
use crate::{render::texture::Image, Result};

/// Repeating, linearly filtered and mipmapped 2D texture.
pub struct Texture2D {
    handle: u32,
}

impl Texture2D {
    pub fn from_image(image: &Image) -> Result<Self> {
        let format = match image.channels() {
            1 => gl::RED,
            4 => gl::RGBA,
            _ => gl::RGB,
        };

        let mut handle = 0;
        unsafe {
            gl::GenTextures(1, &mut handle);
            gl::BindTexture(gl::TEXTURE_2D, handle);

            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_S, gl::REPEAT as i32);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_T, gl::REPEAT as i32);
            gl::TexParameteri(
                gl::TEXTURE_2D,
                gl::TEXTURE_MIN_FILTER,
                gl::LINEAR_MIPMAP_LINEAR as i32,
            );
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MAG_FILTER, gl::LINEAR as i32);

            // Rows of RGB texels are not 4-byte aligned in general.
            gl::PixelStorei(gl::UNPACK_ALIGNMENT, 1);
            gl::TexImage2D(
                gl::TEXTURE_2D,
                0,
                format as i32,
                image.width() as i32,
                image.height() as i32,
                0,
                format,
                gl::UNSIGNED_BYTE,
                image.pixels().as_ptr() as *const _,
            );
            gl::GenerateMipmap(gl::TEXTURE_2D);
        }

        // Construct first so the name is released if the upload failed.
        let texture = Self { handle };
        check_errors()?;

        debug!("Uploaded {}x{} texture.", image.width(), image.height());
        Ok(texture)
    }

    pub fn bind(&self, unit: u32) {
        unsafe {
            gl::ActiveTexture(gl::TEXTURE0 + unit);
            gl::BindTexture(gl::TEXTURE_2D, self.handle);
        }
    }
}

impl OpenGLObject for Texture2D {
    fn handle(&self) -> u32 {
        self.handle
    }
}

impl Drop for Texture2D {
    fn drop(&mut self) {
        unsafe { gl::DeleteTextures(1, &self.handle) };
    }
}
