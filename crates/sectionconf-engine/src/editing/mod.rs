//! A document bound to the store it was read from.
//!
//! [`ConfigFile`] keeps the text it last read or wrote next to the document
//! rebuilt from it. Callers edit the document in place and call
//! [`ConfigFile::save`] to overwrite the store with the serialized form.

use crate::{
    io::{IoError, TextSink, TextSource},
    models::Document,
    parsing::{self, Diagnostic},
    writing::{self, WriteOptions},
};

#[derive(Debug)]
pub struct ConfigFile<S> {
    store: S,
    source_text: String,
    document: Document,
    diagnostics: Vec<Diagnostic>,
    write_options: WriteOptions,
}

impl<S: TextSource> ConfigFile<S> {
    /// Reads the store and parses it.
    pub fn open(store: S) -> Result<Self, IoError> {
        let source_text = store.read_text()?;
        let (document, diagnostics) = parsing::parse_with_report(&source_text).into_parts();

        Ok(Self {
            store,
            source_text,
            document,
            diagnostics,
            write_options: WriteOptions::default(),
        })
    }

    /// Re-reads the store and rebuilds the document from scratch, dropping
    /// unsaved edits.
    pub fn reload(&mut self) -> Result<(), IoError> {
        let source_text = self.store.read_text()?;
        let (document, diagnostics) = parsing::parse_with_report(&source_text).into_parts();
        log::info!(
            "reloaded document: {} section(s), {} diagnostic(s)",
            document.len(),
            diagnostics.len()
        );

        self.source_text = source_text;
        self.document = document;
        self.diagnostics = diagnostics;
        Ok(())
    }
}

impl<S> ConfigFile<S> {
    #[must_use]
    pub fn with_write_options(mut self, write_options: WriteOptions) -> Self {
        self.write_options = write_options;
        self
    }

    /// The text last read from or written to the store.
    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    /// Header names of the source text in order, duplicates included.
    pub fn headers(&self) -> Vec<String> {
        parsing::headers(&self.source_text)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// Diagnostics for the current source text. After a save they describe
    /// the written text.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_document(self) -> Document {
        self.document
    }
}

impl<S: TextSink> ConfigFile<S> {
    /// Serializes the document and overwrites the store with it.
    ///
    /// Entries that will not re-parse faithfully are still written; each is
    /// logged as a warning.
    pub fn save(&mut self) -> Result<(), IoError> {
        for issue in writing::check_writable(&self.document) {
            log::warn!("{issue}");
        }

        let text = writing::serialize_with(&self.document, &self.write_options);
        self.store.write_text(&text)?;
        log::info!(
            "saved document: {} section(s), {} byte(s)",
            self.document.len(),
            text.len()
        );

        self.diagnostics = parsing::parse_with_report(&text).into_parts().1;
        self.source_text = text;
        Ok(())
    }
}
