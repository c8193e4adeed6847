//!
//! Custom palettes picked from the color table.
//!

use crate::dataset::ColorTable;
use crate::error::ColorError;
use crate::parse::to_hex;
use crate::sample::{Direction, cycle};
use log::{debug, warn};
use std::collections::HashSet;

/// Sort key for colors that have no id.
const NO_ID: u64 = 1_000_000_000;

/// Order of the picked colors.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OrderRule {
    /// Keep the order of selection.
    #[default]
    PreserveInput,
    /// Sort by `color_id`.
    Ascending,
    /// Sort by `color_id`, descending.
    Descending,
}

impl OrderRule {
    /// Integer encoding `1`, `0`, `-1`.
    pub fn from_code(code: i32) -> Result<OrderRule, ColorError> {
        match code {
            1 => Ok(OrderRule::PreserveInput),
            0 => Ok(OrderRule::Ascending),
            -1 => Ok(OrderRule::Descending),
            v => Err(ColorError::InvalidArgument(format!(
                "order_rule must be 1, 0 or -1, not {}",
                v
            ))),
        }
    }

    pub const fn code(self) -> i32 {
        match self {
            OrderRule::PreserveInput => 1,
            OrderRule::Ascending => 0,
            OrderRule::Descending => -1,
        }
    }
}

/// Subgroups selected within a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubgroupSel {
    /// All four subgroups, `4, 3, 2, 1`.
    AllDescending,
    /// These subgroups in this order.
    List(Vec<u32>),
}

impl Default for SubgroupSel {
    /// All four subgroups, `1, 2, 3, 4`.
    fn default() -> Self {
        SubgroupSel::List(vec![1, 2, 3, 4])
    }
}

impl SubgroupSel {
    /// Integer encoding. A lone `-1` selects all subgroups descending,
    /// otherwise each value must be in `1..=4`.
    pub fn from_codes(codes: &[i32]) -> Result<SubgroupSel, ColorError> {
        if codes == [-1] {
            return Ok(SubgroupSel::AllDescending);
        }
        let mut list = Vec::with_capacity(codes.len());
        for c in codes {
            if !(1..=4).contains(c) {
                return Err(ColorError::InvalidArgument(format!(
                    "subgroup must be 1..=4 or a single -1, not {}",
                    c
                )));
            }
            list.push(*c as u32);
        }
        Ok(SubgroupSel::List(list))
    }

    /// The subgroups in selection order.
    pub fn subgroups(&self) -> &[u32] {
        match self {
            SubgroupSel::AllDescending => &[4, 3, 2, 1],
            SubgroupSel::List(v) => v,
        }
    }
}

/// Selection of colors by id and by group/subgroup.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ColorPick {
    pub color_ids: Vec<u32>,
    pub groups: Vec<(u32, SubgroupSel)>,
    pub order: OrderRule,
}

impl ColorPick {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add explicit color ids.
    pub fn color_ids(mut self, ids: impl IntoIterator<Item = u32>) -> Self {
        self.color_ids.extend(ids);
        self
    }

    /// Add a group with its subgroups.
    pub fn group(mut self, group: u32, subgroups: SubgroupSel) -> Self {
        self.groups.push((group, subgroups));
        self
    }

    /// Add groups.
    ///
    /// Without subgroups each group selects `1, 2, 3, 4`.
    /// A single subgroup selection is used for all groups,
    /// otherwise there must be one per group.
    pub fn groups(
        mut self,
        groups: impl IntoIterator<Item = u32>,
        subgroups: Option<Vec<SubgroupSel>>,
    ) -> Result<Self, ColorError> {
        let groups = groups.into_iter().collect::<Vec<_>>();
        match subgroups {
            None => {
                for g in groups {
                    self.groups.push((g, SubgroupSel::default()));
                }
            }
            Some(sub) if sub.len() == 1 => {
                for g in groups {
                    self.groups.push((g, sub[0].clone()));
                }
            }
            Some(sub) if sub.len() == groups.len() => {
                self.groups.extend(groups.into_iter().zip(sub));
            }
            Some(sub) => {
                return Err(ColorError::InvalidArgument(format!(
                    "subgroups must be length 1 or match the {} groups, not {}",
                    groups.len(),
                    sub.len()
                )));
            }
        }
        Ok(self)
    }

    pub fn order(mut self, order: OrderRule) -> Self {
        self.order = order;
        self
    }
}

/// Builds a custom palette.
///
/// Colors are collected from ids, names, hex values and groups,
/// in that order. Duplicates are removed, the first one wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomPalette {
    pub color_ids: Vec<u32>,
    pub names: Vec<String>,
    pub hexes: Vec<String>,
    pub groups: Vec<(u32, SubgroupSel)>,
    pub order: OrderRule,
    pub count: Option<usize>,
    pub direction: Direction,
}

impl Default for CustomPalette {
    fn default() -> Self {
        Self {
            color_ids: Default::default(),
            names: Default::default(),
            hexes: Default::default(),
            groups: Default::default(),
            order: Default::default(),
            count: None,
            direction: Direction::Forward,
        }
    }
}

impl From<&ColorPick> for CustomPalette {
    fn from(pick: &ColorPick) -> Self {
        Self {
            color_ids: pick.color_ids.clone(),
            groups: pick.groups.clone(),
            order: pick.order,
            ..Default::default()
        }
    }
}

impl CustomPalette {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color_ids(mut self, ids: impl IntoIterator<Item = u32>) -> Self {
        self.color_ids.extend(ids);
        self
    }

    /// Exact color names.
    pub fn names<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.names.extend(names.into_iter().map(|v| v.into()));
        self
    }

    /// Colors in any notation known to [to_hex](crate::to_hex).
    /// Invalid ones are ignored.
    pub fn hexes<S: Into<String>>(mut self, hexes: impl IntoIterator<Item = S>) -> Self {
        self.hexes.extend(hexes.into_iter().map(|v| v.into()));
        self
    }

    pub fn group(mut self, group: u32, subgroups: SubgroupSel) -> Self {
        self.groups.push((group, subgroups));
        self
    }

    pub fn order(mut self, order: OrderRule) -> Self {
        self.order = order;
        self
    }

    /// Cycle or truncate to this many colors.
    pub fn count(mut self, count: Option<usize>) -> Self {
        self.count = count;
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Pick the colors from the table.
    pub fn build(&self, table: &ColorTable) -> Result<Vec<String>, ColorError> {
        let mut chosen: Vec<(u64, String)> = Vec::new();

        for id in &self.color_ids {
            match table.by_id(*id) {
                Some(c) => chosen.push((*id as u64, c.hex.clone())),
                None => debug!("no color with id {}", id),
            }
        }

        for name in &self.names {
            match table.by_name(name) {
                Some(c) => chosen.push((c.color_id.map(u64::from).unwrap_or(NO_ID), c.hex.clone())),
                None => debug!("no color named {:?}", name),
            }
        }

        for hex in &self.hexes {
            match to_hex(hex) {
                Ok(v) => chosen.push((NO_ID + chosen.len() as u64, v)),
                Err(e) => warn!("ignore {}", e),
            }
        }

        for (group, subgroups) in &self.groups {
            for subgroup in subgroups.subgroups() {
                for c in table.iter() {
                    if c.group_id == Some(*group) && c.subgroup_id == Some(*subgroup) {
                        if let Some(id) = c.color_id {
                            chosen.push((id as u64, c.hex.clone()));
                        }
                    }
                }
            }
        }

        let mut seen = HashSet::new();
        let mut colors = chosen
            .into_iter()
            .filter(|(_, hex)| seen.insert(hex.clone()))
            .collect::<Vec<_>>();

        if colors.is_empty() {
            return Err(ColorError::EmptySelection);
        }

        match self.order {
            OrderRule::PreserveInput => {}
            OrderRule::Ascending => colors.sort(),
            OrderRule::Descending => {
                colors.sort();
                colors.reverse();
            }
        }

        let mut colors = colors.into_iter().map(|(_, hex)| hex).collect::<Vec<_>>();
        if let Some(n) = self.count {
            colors = if n > colors.len() {
                cycle(&colors, n)
            } else {
                colors.truncate(n);
                colors
            };
        }

        Ok(self.direction.apply(colors))
    }
}
