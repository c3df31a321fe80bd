use super::OpenGLObject;
use std::mem::size_of;

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferDraw {
    Stream = gl::STREAM_DRAW,
    Static = gl::STATIC_DRAW,
    Dynamic = gl::DYNAMIC_DRAW,
}

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferTarget {
    Array = gl::ARRAY_BUFFER,
    Element = gl::ELEMENT_ARRAY_BUFFER,
}

/// A GL buffer object holding `data_len` elements of `T`.
pub struct Buffer<T: Copy> {
    handle: u32,
    target: BufferTarget,
    data_len: usize,
    marker: std::marker::PhantomData<T>,
}

impl<T: Copy> Buffer<T> {
    pub fn new(target: BufferTarget) -> Self {
        let mut handle = 0;

        unsafe { gl::GenBuffers(1, &mut handle) };

        Self {
            handle,
            target,
            data_len: 0,
            marker: std::marker::PhantomData,
        }
    }

    pub fn new_data(target: BufferTarget, data: &[T], draw: BufferDraw) -> Self {
        let mut buffer = Self::new(target);
        buffer.set_data(data, draw);
        buffer
    }

    pub fn data_len(&self) -> usize {
        self.data_len
    }

    pub fn byte_len(&self) -> usize {
        self.data_len() * size_of::<T>()
    }

    /// Replaces the whole store. Leaves the buffer bound to its target.
    pub fn set_data(&mut self, data: &[T], draw: BufferDraw) {
        self.data_len = data.len();
        self.bind();

        unsafe {
            gl::BufferData(
                self.target as u32,
                self.byte_len() as isize,
                data.as_ptr() as *const _,
                draw as u32,
            )
        };
    }

    pub fn bind(&self) {
        unsafe { gl::BindBuffer(self.target as u32, self.handle()) };
    }
}

impl<T: Copy> OpenGLObject for Buffer<T> {
    fn handle(&self) -> u32 {
        self.handle
    }
}

impl<T: Copy> Drop for Buffer<T> {
    fn drop(&mut self) {
        unsafe { gl::DeleteBuffers(1, &self.handle) };
    }
}
