//! Enclosure (bracket/quote) mapping and depth tracking

use std::collections::HashMap;

use crate::language::interface::EnclosureInfo;

/// Enclosure character mapping table
#[derive(Debug, Clone)]
pub struct EncTable {
    map: HashMap<char, EnclosureInfo>,
    pair_count: usize,
}

impl EncTable {
    /// Create from `(open, close, symmetric)` pairs; ids follow list order
    pub fn new(pairs: &[(char, char, bool)]) -> Self {
        let mut map = HashMap::new();

        for (type_id, &(open, close, symmetric)) in pairs.iter().take(255).enumerate() {
            let type_id = type_id as u8;
            if symmetric {
                let info = EnclosureInfo {
                    type_id,
                    delta: 0,
                    symmetric: true,
                };
                map.insert(open, info);
                map.insert(close, info);
            } else {
                map.insert(
                    open,
                    EnclosureInfo {
                        type_id,
                        delta: 1,
                        symmetric: false,
                    },
                );
                map.insert(
                    close,
                    EnclosureInfo {
                        type_id,
                        delta: -1,
                        symmetric: false,
                    },
                );
            }
        }

        Self {
            map,
            pair_count: pairs.len().min(255),
        }
    }

    #[inline]
    pub fn get(&self, ch: char) -> Option<EnclosureInfo> {
        self.map.get(&ch).copied()
    }

    pub fn pair_count(&self) -> usize {
        self.pair_count
    }
}

/// Open-enclosure depth per pair id.
///
/// Symmetric marks toggle their pair; asymmetric closers never push a depth
/// below zero, so a stray `)` is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnclosureDepth {
    depths: Vec<u32>,
}

impl EnclosureDepth {
    pub fn new(pair_count: usize) -> Self {
        Self {
            depths: vec![0; pair_count],
        }
    }

    pub fn apply(&mut self, info: EnclosureInfo) {
        let Some(depth) = self.depths.get_mut(info.type_id as usize) else {
            return;
        };
        if info.symmetric {
            *depth = if *depth == 0 { 1 } else { 0 };
        } else if info.delta > 0 {
            *depth += 1;
        } else {
            *depth = depth.saturating_sub(1);
        }
    }

    /// Would `info` close a currently open enclosure?
    pub fn closes(&self, info: EnclosureInfo) -> bool {
        let open = self
            .depths
            .get(info.type_id as usize)
            .is_some_and(|&d| d > 0);
        open && (info.symmetric || info.delta < 0)
    }

    pub fn is_open(&self) -> bool {
        self.depths.iter().any(|&d| d > 0)
    }

    pub fn reset(&mut self) {
        self.depths.iter_mut().for_each(|d| *d = 0);
    }
}
