//! SVG Tiny serialization of a [`Document`](super::Document).
//!
//! Circles are filled, paths are stroked without fill. The canvas maps to a
//! `viewBox` of the source image size scaled to 100% of the viewport.
use super::{OutputSink, PathCommand};
use crate::error::ConvertError;
use nalgebra::Point2;
use serde::Deserialize;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

/// Paint settings applied to every primitive.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SvgStyle {
    pub color: String,
    pub stroke_width: f32,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            color: "black".to_string(),
            stroke_width: 0.5,
        }
    }
}

/// Incremental SVG markup builder.
#[derive(Clone, Debug)]
pub struct SvgWriter {
    style: SvgStyle,
    /// `style.color`, attribute-escaped.
    color_attr: String,
    width: usize,
    height: usize,
    body: String,
}

impl SvgWriter {
    pub fn new(style: SvgStyle) -> Self {
        Self {
            color_attr: escape_attr(&style.color),
            style,
            width: 0,
            height: 0,
            body: String::new(),
        }
    }

    /// Complete document markup.
    pub fn to_markup(&self) -> String {
        let mut out = String::with_capacity(self.body.len() + 256);
        out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\" ?>\n");
        let _ = writeln!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.2\" baseProfile=\"tiny\" \
             width=\"100%\" height=\"100%\" viewBox=\"0 0 {} {}\">",
            self.width, self.height
        );
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }
}

impl Default for SvgWriter {
    fn default() -> Self {
        Self::new(SvgStyle::default())
    }
}

/// Escapes `value` for use inside a double-quoted XML attribute.
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Writes the path data (`d` attribute) for `commands`.
pub fn path_data(commands: &[PathCommand]) -> String {
    let mut d = String::with_capacity(commands.len() * 12);
    for (i, cmd) in commands.iter().enumerate() {
        if i > 0 {
            d.push(' ');
        }
        let (op, p) = match *cmd {
            PathCommand::MoveTo(p) => ('M', p),
            PathCommand::LineTo(p) => ('L', p),
            PathCommand::SmoothQuadTo(p) => ('T', p),
        };
        let _ = write!(d, "{op}{},{}", p.x, p.y);
    }
    d
}

impl OutputSink for SvgWriter {
    type Handle = String;

    fn set_canvas(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
    }

    fn add_circle(&mut self, center: Point2<f32>, radius: f32) {
        let _ = writeln!(
            self.body,
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\" />",
            center.x, center.y, radius, self.color_attr
        );
    }

    fn add_path(&mut self, commands: &[PathCommand]) {
        if commands.is_empty() {
            return;
        }
        let _ = writeln!(
            self.body,
            "<path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" />",
            path_data(commands),
            self.color_attr,
            self.style.stroke_width
        );
    }

    fn finalize(self) -> Result<String, ConvertError> {
        Ok(self.to_markup())
    }
}

/// Writes the SVG to an explicit file path and hands the path back.
#[derive(Clone, Debug)]
pub struct SvgFileSink {
    path: PathBuf,
    writer: SvgWriter,
}

impl SvgFileSink {
    pub fn new(path: impl Into<PathBuf>, style: SvgStyle) -> Self {
        Self {
            path: path.into(),
            writer: SvgWriter::new(style),
        }
    }
}

impl OutputSink for SvgFileSink {
    type Handle = PathBuf;

    fn set_canvas(&mut self, width: usize, height: usize) {
        self.writer.set_canvas(width, height);
    }

    fn add_circle(&mut self, center: Point2<f32>, radius: f32) {
        self.writer.add_circle(center, radius);
    }

    fn add_path(&mut self, commands: &[PathCommand]) {
        self.writer.add_path(commands);
    }

    fn finalize(self) -> Result<PathBuf, ConvertError> {
        let write_err = |source| ConvertError::OutputWrite {
            target: self.path.display().to_string(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(write_err)?;
            }
        }
        fs::write(&self.path, self.writer.to_markup()).map_err(write_err)?;
        Ok(self.path)
    }
}
