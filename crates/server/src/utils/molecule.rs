// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Minimal molecule codec for the on-chain structures this service reads.
//!
//! Only the three layouts in use are covered: `table` (a `u32` total size,
//! one `u32` offset per field, then the field bodies), `Bytes` (a `fixvec`
//! of bytes: `u32` item count followed by the items) and `BytesOpt` (empty
//! for `None`, otherwise a `Bytes`). All integers are little-endian and all
//! declared sizes are checked against the buffer.

use thiserror::Error;

const NUMBER_SIZE: usize = 4;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoleculeError {
    #[error("Buffer too short: need {needed} bytes, have {available}")]
    TooShort { needed: usize, available: usize },

    #[error("Declared size {declared} does not match buffer size {actual}")]
    SizeMismatch { declared: usize, actual: usize },

    #[error("Invalid field offset {0}")]
    InvalidOffset(usize),
}

fn read_u32(data: &[u8], at: usize) -> Result<usize, MoleculeError> {
    let bytes = data
        .get(at..at + NUMBER_SIZE)
        .ok_or(MoleculeError::TooShort {
            needed: at + NUMBER_SIZE,
            available: data.len(),
        })?;
    let mut buf = [0u8; NUMBER_SIZE];
    buf.copy_from_slice(bytes);
    Ok(u32::from_le_bytes(buf) as usize)
}

/// A parsed table header. Field bodies are borrowed from the input.
#[derive(Debug)]
pub struct TableReader<'a> {
    data: &'a [u8],
    offsets: Vec<usize>,
}

impl<'a> TableReader<'a> {
    pub fn parse(data: &'a [u8]) -> Result<Self, MoleculeError> {
        let full_size = read_u32(data, 0)?;
        if full_size != data.len() {
            return Err(MoleculeError::SizeMismatch {
                declared: full_size,
                actual: data.len(),
            });
        }
        if full_size == NUMBER_SIZE {
            return Ok(Self {
                data,
                offsets: Vec::new(),
            });
        }

        let first_offset = read_u32(data, NUMBER_SIZE)?;
        if first_offset % NUMBER_SIZE != 0
            || first_offset < NUMBER_SIZE * 2
            || first_offset > full_size
        {
            return Err(MoleculeError::InvalidOffset(first_offset));
        }

        let field_count = first_offset / NUMBER_SIZE - 1;
        let mut offsets = Vec::with_capacity(field_count);
        for i in 0..field_count {
            offsets.push(read_u32(data, NUMBER_SIZE * (i + 1))?);
        }

        let mut previous = first_offset;
        for &offset in &offsets {
            if offset < previous || offset > full_size {
                return Err(MoleculeError::InvalidOffset(offset));
            }
            previous = offset;
        }

        Ok(Self { data, offsets })
    }

    pub fn field_count(&self) -> usize {
        self.offsets.len()
    }

    /// Raw body of field `index`, or `None` past the last field. Tables
    /// written by newer schema versions carry extra trailing fields, which
    /// readers of the older version simply ignore.
    pub fn field(&self, index: usize) -> Option<&'a [u8]> {
        let start = *self.offsets.get(index)?;
        let end = self
            .offsets
            .get(index + 1)
            .copied()
            .unwrap_or(self.data.len());
        self.data.get(start..end)
    }
}

/// Unpack a `Bytes` fixvec, honouring its declared length.
pub fn unpack_bytes(raw: &[u8]) -> Result<&[u8], MoleculeError> {
    let len = read_u32(raw, 0)?;
    let total = NUMBER_SIZE + len;
    if raw.len() != total {
        return Err(MoleculeError::SizeMismatch {
            declared: total,
            actual: raw.len(),
        });
    }
    Ok(&raw[NUMBER_SIZE..])
}

/// Unpack a `BytesOpt`.
pub fn unpack_bytes_opt(raw: &[u8]) -> Result<Option<&[u8]>, MoleculeError> {
    if raw.is_empty() {
        return Ok(None);
    }
    unpack_bytes(raw).map(Some)
}

pub fn pack_bytes(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(NUMBER_SIZE + data.len());
    out.extend_from_slice(&(data.len() as u32).to_le_bytes());
    out.extend_from_slice(data);
    out
}

pub fn pack_bytes_opt(data: Option<&[u8]>) -> Vec<u8> {
    data.map(pack_bytes).unwrap_or_default()
}

/// Pack already-serialized field bodies into a table.
pub fn pack_table(fields: &[&[u8]]) -> Vec<u8> {
    let header_size = NUMBER_SIZE * (fields.len() + 1);
    let body_size: usize = fields.iter().map(|f| f.len()).sum();
    let full_size = header_size + body_size;

    let mut out = Vec::with_capacity(full_size);
    out.extend_from_slice(&(full_size as u32).to_le_bytes());
    let mut offset = header_size;
    for field in fields {
        out.extend_from_slice(&(offset as u32).to_le_bytes());
        offset += field.len();
    }
    for field in fields {
        out.extend_from_slice(field);
    }
    out
}
