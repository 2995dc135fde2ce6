//! mdframe Core
//!
//! This crate provides the document model, style types and error
//! definitions shared by the mdframe parser and render engine.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`Document`], [`Block`], [`ListItem`], [`Cell`] - The parsed document model
//! - [`Span`], [`StyleAttrs`] - Character-offset formatting ranges
//! - [`Rgb`], [`Paint`], [`FontName`], [`InlineTheme`] - Style primitives
//! - [`MdframeError`] - Error types

pub mod document;
pub mod error;
pub mod span;
pub mod types;

pub use document::{Block, Cell, Document, ListItem, Row, DEFAULT_TITLE};
pub use error::{MdframeError, Result};
pub use span::{char_len, Span, StyleAttrs};
pub use types::{FontName, InlineTheme, Paint, Rgb};
