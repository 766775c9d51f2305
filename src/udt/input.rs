//! Single-attribute input for scalar custom types
//!
//! A [`SingleAttributeInput`] hands exactly one attribute to a custom type's
//! `read_sql`. The first read of any kind moves it from
//! [`ReadState::Unread`] to [`ReadState::ReadDone`], or to
//! [`ReadState::Failed`] when the conversion fails. Both are terminal: any
//! further read fails with [`Error::MultipleAttributes`].

use rust_decimal::Decimal;

use crate::access::{Nullable, ValueAccess};
use crate::error::{Error, Result};
use crate::value::ScalarValue;

/// Read progress of a [`SingleAttributeInput`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadState {
    /// Nothing has been read yet
    Unread,
    /// The attribute has been read
    ReadDone {
        /// Whether the attribute read was NULL
        was_null: bool,
    },
    /// The one read was issued and its conversion failed
    Failed,
}

/// Input stream over a single attribute, handed to [`SqlData::read_sql`].
///
/// Primitive reads return the target's default for NULL; use
/// [`was_null`](Self::was_null) to tell the difference. Reads of string,
/// decimal and object values return `None` for NULL.
///
/// [`SqlData::read_sql`]: crate::udt::SqlData::read_sql
#[derive(Debug)]
pub struct SingleAttributeInput {
    access: Box<dyn ValueAccess>,
    state: ReadState,
    attempts: usize,
}

impl SingleAttributeInput {
    /// Wrap one value accessor
    pub fn new(access: Box<dyn ValueAccess>) -> Self {
        Self {
            access,
            state: ReadState::Unread,
            attempts: 0,
        }
    }

    /// Get the current read state
    pub fn state(&self) -> ReadState {
        self.state
    }

    /// Whether the single attribute has been read
    pub fn is_read_done(&self) -> bool {
        matches!(self.state, ReadState::ReadDone { .. })
    }

    /// Whether the attribute read was NULL (`false` before any read)
    pub fn was_null(&self) -> bool {
        matches!(self.state, ReadState::ReadDone { was_null: true })
    }

    /// Number of reads issued so far, including rejected ones
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Whether the wrapped value is NULL, without consuming the read
    pub fn is_null(&self) -> bool {
        self.access.is_null()
    }

    /// The single entry point every read goes through
    fn read<T>(
        &mut self,
        getter: impl FnOnce(&dyn ValueAccess) -> Result<Nullable<T>>,
    ) -> Result<Nullable<T>> {
        self.attempts += 1;
        if self.state != ReadState::Unread {
            return Err(Error::MultipleAttributes {
                attempt: self.attempts,
            });
        }

        let value = match getter(self.access.as_ref()) {
            Ok(value) => value,
            Err(e) => {
                self.state = ReadState::Failed;
                return Err(e);
            }
        };
        self.state = ReadState::ReadDone {
            was_null: value.is_null(),
        };
        tracing::trace!(was_null = value.is_null(), "Read single attribute");
        Ok(value)
    }

    /// Read the attribute as text
    pub fn read_string(&mut self) -> Result<Option<String>> {
        self.read(|a| a.get_string()).map(Nullable::into_option)
    }

    /// Read the attribute as a boolean (`false` for NULL)
    pub fn read_boolean(&mut self) -> Result<bool> {
        self.read(|a| a.get_boolean()).map(Nullable::into_value)
    }

    /// Read the attribute as a signed byte (`0` for NULL)
    pub fn read_byte(&mut self) -> Result<i8> {
        self.read(|a| a.get_byte()).map(Nullable::into_value)
    }

    /// Read the attribute as a short (`0` for NULL)
    pub fn read_short(&mut self) -> Result<i16> {
        self.read(|a| a.get_short()).map(Nullable::into_value)
    }

    /// Read the attribute as an int (`0` for NULL)
    pub fn read_int(&mut self) -> Result<i32> {
        self.read(|a| a.get_int()).map(Nullable::into_value)
    }

    /// Read the attribute as a long (`0` for NULL)
    pub fn read_long(&mut self) -> Result<i64> {
        self.read(|a| a.get_long()).map(Nullable::into_value)
    }

    /// Read the attribute as a float (`0.0` for NULL)
    pub fn read_float(&mut self) -> Result<f32> {
        self.read(|a| a.get_float()).map(Nullable::into_value)
    }

    /// Read the attribute as a double (`0.0` for NULL)
    pub fn read_double(&mut self) -> Result<f64> {
        self.read(|a| a.get_double()).map(Nullable::into_value)
    }

    /// Read the attribute as an exact decimal
    pub fn read_decimal(&mut self) -> Result<Option<Decimal>> {
        self.read(|a| a.get_decimal()).map(Nullable::into_option)
    }

    /// Read the decoded value as is
    pub fn read_object(&mut self) -> Result<Option<ScalarValue>> {
        self.read(|a| a.get_object()).map(Nullable::into_option)
    }
}
