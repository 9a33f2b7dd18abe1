/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Global Decoder options
//!
//! Limits a decoder checks while reading headers. The defaults impose no
//! limits, targets with little memory should lower them.

/// Decoder options
#[derive(Debug, Copy, Clone)]
pub struct DecoderOptions {
    /// Maximum width for which decoders will
    /// refuse to open images larger than
    /// the specified width.
    ///
    /// - Default value: `usize::MAX`
    max_width:          usize,
    /// Maximum height for which decoders will
    /// refuse to open images larger than
    /// the specified height.
    ///
    /// - Default value: `usize::MAX`
    max_height:         usize,
    /// Maximum number of palette entries a decoder
    /// will load into memory.
    ///
    /// - Default value: `u32::MAX`
    max_palette_colors: u32
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            max_width:          usize::MAX,
            max_height:         usize::MAX,
            max_palette_colors: u32::MAX
        }
    }
}

impl DecoderOptions {
    /// Get maximum width configured for which the decoder
    /// should not try to open images greater than this width
    pub const fn get_max_width(&self) -> usize {
        self.max_width
    }

    /// Get maximum height configured for which the decoder should
    /// not try to open images greater than this height
    pub const fn get_max_height(&self) -> usize {
        self.max_height
    }

    /// Get the maximum number of palette entries the decoder
    /// will allocate for
    pub const fn get_max_palette_colors(&self) -> u32 {
        self.max_palette_colors
    }

    /// Set maximum width for which the decoder should not try
    /// opening images greater than that width
    ///
    /// # Arguments
    ///
    /// * `width`:  The maximum width allowed
    ///
    /// returns: DecoderOptions
    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    /// Set maximum height for which the decoder should not try
    /// opening images greater than that height
    /// # Arguments
    ///
    /// * `height`: The maximum height allowed
    ///
    /// returns: DecoderOptions
    ///
    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }

    /// Set the largest colour table the decoder will load.
    ///
    /// Palettes live in memory for as long as the image is open,
    /// so this bounds what a single file can make us allocate.
    pub fn set_max_palette_colors(mut self, colors: u32) -> Self {
        self.max_palette_colors = colors;
        self
    }
}
