//! Output document and the sink abstraction it is serialized through.
//!
//! [`DocumentAssembler`] collects primitives in block emission order on a
//! canvas fixed to the source image size. Finishing replays the collected
//! primitives into an [`OutputSink`] exactly once; the assembler itself never
//! touches the filesystem.
mod primitive;
pub mod svg;

pub use self::primitive::{Path, PathCommand, Primitive};

use crate::error::ConvertError;
use nalgebra::Point2;
use serde::Serialize;

/// Canvas size plus the primitives drawn on it.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Document {
    pub width: usize,
    pub height: usize,
    pub primitives: Vec<Primitive>,
}

/// Destination of an assembled document (a file writer, a string, ...).
pub trait OutputSink {
    /// Identifier handed back to the caller once the output is complete.
    type Handle;

    fn set_canvas(&mut self, width: usize, height: usize);
    fn add_circle(&mut self, center: Point2<f32>, radius: f32);
    fn add_path(&mut self, commands: &[PathCommand]);
    fn finalize(self) -> Result<Self::Handle, ConvertError>;
}

/// In-memory sink: the handle is the document itself.
impl OutputSink for Document {
    type Handle = Document;

    fn set_canvas(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
    }

    fn add_circle(&mut self, center: Point2<f32>, radius: f32) {
        self.primitives.push(Primitive::Circle { center, radius });
    }

    fn add_path(&mut self, commands: &[PathCommand]) {
        self.primitives.push(Primitive::Path(Path {
            commands: commands.to_vec(),
        }));
    }

    fn finalize(self) -> Result<Document, ConvertError> {
        Ok(self)
    }
}

/// Accumulates primitives for one conversion.
#[derive(Debug)]
pub struct DocumentAssembler {
    document: Document,
}

impl DocumentAssembler {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            document: Document {
                width,
                height,
                primitives: Vec::new(),
            },
        }
    }

    pub fn extend<P>(&mut self, primitives: P)
    where
        P: IntoIterator<Item = Primitive>,
    {
        self.document.primitives.extend(primitives);
    }

    pub fn len(&self) -> usize {
        self.document.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.document.primitives.is_empty()
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    /// Replay the document into `sink` and finalize it.
    pub fn finish<S: OutputSink>(self, mut sink: S) -> Result<S::Handle, ConvertError> {
        let Document {
            width,
            height,
            primitives,
        } = self.document;
        sink.set_canvas(width, height);
        for primitive in &primitives {
            match primitive {
                Primitive::Circle { center, radius } => sink.add_circle(*center, *radius),
                Primitive::Path(path) => sink.add_path(&path.commands),
            }
        }
        sink.finalize()
    }
}
