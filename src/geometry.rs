use crate::consts::{BYTE_RANGE, KEY_NOT_FOUND_U8, MAX_KEYS};
use crate::error::{PassForgeError, PfResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyNode {
    pub key: char,
    pub row: usize,
    pub col: usize,
}

/// On-disk shape of a custom layout.
///
/// ```json
/// { "name": "qwerty", "rows": ["qwertyuiop", "asdfghjkl", "zxcvbnm"] }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutFile {
    #[serde(default = "default_layout_name")]
    pub name: String,
    pub rows: Vec<String>,
}

fn default_layout_name() -> String {
    "custom".to_string()
}

/// A keyboard as a grid of rows. Rows are left-aligned and may differ in
/// length; every key appears exactly once.
#[derive(Debug, Clone)]
pub struct KeyboardLayout {
    name: String,
    keys: Vec<KeyNode>,
    row_starts: Vec<usize>,
    row_lens: Vec<usize>,
    pos_map: Box<[u8; BYTE_RANGE]>,
}

impl KeyboardLayout {
    pub fn from_rows<S: AsRef<str>>(name: impl Into<String>, rows: &[S]) -> PfResult<Self> {
        let name = name.into();
        let mut keys = Vec::new();
        let mut row_starts = Vec::with_capacity(rows.len());
        let mut row_lens = Vec::with_capacity(rows.len());
        let mut pos_map = Box::new([KEY_NOT_FOUND_U8; BYTE_RANGE]);

        for (row, line) in rows.iter().enumerate() {
            row_starts.push(keys.len());
            let mut len = 0;
            for (col, key) in line.as_ref().chars().enumerate() {
                if !key.is_ascii() {
                    return Err(PassForgeError::Validation(format!(
                        "Layout '{}': key '{}' at row {} col {} is not ASCII",
                        name, key, row, col
                    )));
                }
                let byte = key as u8 as usize;
                if pos_map[byte] != KEY_NOT_FOUND_U8 {
                    return Err(PassForgeError::Validation(format!(
                        "Layout '{}': key '{}' appears more than once",
                        name, key
                    )));
                }
                if keys.len() >= MAX_KEYS {
                    return Err(PassForgeError::Validation(format!(
                        "Layout '{}' has more than {} keys",
                        name, MAX_KEYS
                    )));
                }
                pos_map[byte] = keys.len() as u8;
                keys.push(KeyNode { key, row, col });
                len += 1;
            }
            row_lens.push(len);
        }

        if keys.is_empty() {
            return Err(PassForgeError::Validation(format!(
                "Layout '{}' has no keys",
                name
            )));
        }

        Ok(Self {
            name,
            keys,
            row_starts,
            row_lens,
            pos_map,
        })
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> PfResult<Self> {
        let content = fs::read_to_string(path)?;
        let file: LayoutFile = serde_json::from_str(&content)?;
        Self::from_rows(file.name, &file.rows)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn keys(&self) -> &[KeyNode] {
        &self.keys
    }

    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    pub fn row_count(&self) -> usize {
        self.row_lens.len()
    }

    /// Row-major slot of a character, if it is on the layout.
    #[inline(always)]
    pub fn slot_of(&self, key: char) -> Option<usize> {
        if !key.is_ascii() {
            return None;
        }
        self.slot_of_byte(key as u8)
    }

    #[inline(always)]
    pub fn slot_of_byte(&self, byte: u8) -> Option<usize> {
        match self.pos_map[byte as usize] {
            KEY_NOT_FOUND_U8 => None,
            slot => Some(slot as usize),
        }
    }

    pub fn slot_at(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.row_lens.len() && col < self.row_lens[row] {
            Some(self.row_starts[row] + col)
        } else {
            None
        }
    }

    /// Up, down, left and right neighbours that exist on the grid.
    pub fn neighbors(&self, slot: usize) -> impl Iterator<Item = usize> + '_ {
        let node = self.keys[slot];
        const STEPS: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

        STEPS.iter().filter_map(move |&(d_row, d_col)| {
            let row = node.row.checked_add_signed(d_row)?;
            let col = node.col.checked_add_signed(d_col)?;
            self.slot_at(row, col)
        })
    }
}
