// src/engine/aggregate.rs
use std::collections::{BTreeSet, HashMap, HashSet};

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::model::{RawRow, SsaColumn};
use crate::store::DataSet;

/// Ordered category → count mapping.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Counts(Vec<(String, usize)>);

impl Counts {
    pub fn entries(&self) -> &[(String, usize)] { &self.0 }
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> { self.0.iter().map(|(k, n)| (k.as_str(), *n)) }
    pub fn len(&self) -> usize { self.0.len() }
    pub fn is_empty(&self) -> bool { self.0.is_empty() }
    pub fn keys(&self) -> impl Iterator<Item = &str> { self.0.iter().map(|(k, _)| k.as_str()) }

    pub fn get(&self, key: &str) -> Option<usize> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, n)| *n)
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.0.iter().map(|(_, n)| n).sum()
    }

    pub fn max_count(&self) -> usize {
        self.0.iter().map(|(_, n)| *n).max().unwrap_or(0)
    }

    /// Re-order ascending by key (plain string order).
    pub fn sorted_by_key(mut self) -> Self {
        self.0.sort_by(|a, b| a.0.cmp(&b.0));
        self
    }

    /// Each count divided by the total, same order. Empty in → empty out.
    pub fn normalized(&self) -> Proportions {
        let total = self.total();
        if total == 0 {
            return Proportions::default();
        }
        Proportions(
            self.0
                .iter()
                .map(|(k, n)| (k.clone(), *n as f64 / total as f64))
                .collect(),
        )
    }
}

impl FromIterator<(String, usize)> for Counts {
    fn from_iter<I: IntoIterator<Item = (String, usize)>>(iter: I) -> Self {
        Counts(iter.into_iter().collect())
    }
}

impl Serialize for Counts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, n) in &self.0 {
            map.serialize_entry(k, n)?;
        }
        map.end()
    }
}

/// Ordered category → share mapping (shares sum to 1 unless empty).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Proportions(Vec<(String, f64)>);

impl Proportions {
    pub fn entries(&self) -> &[(String, f64)] { &self.0 }
    pub fn len(&self) -> usize { self.0.len() }
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, p)| *p)
    }
}

impl Serialize for Proportions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, p) in &self.0 {
            map.serialize_entry(k, p)?;
        }
        map.end()
    }
}

/// Count rows per value of `col`, in order of first appearance.
///
/// Grouping is raw, case-sensitive string equality ("ABERTA" ≠ "Aberta").
/// Missing cells (and rows too short to have `col`) group with the empty
/// string, so the counts always add up to the number of rows.
pub fn value_counts<'a, I>(rows: I, col: SsaColumn) -> Counts
where
    I: IntoIterator<Item = &'a RawRow>,
{
    let mut order: Vec<(String, usize)> = Vec::new();
    let mut slot: HashMap<&'a str, usize> = HashMap::new();

    for row in rows {
        let key = row.get(col).unwrap_or("");
        match slot.get(key) {
            Some(&i) => order[i].1 += 1,
            None => {
                slot.insert(key, order.len());
                order.push((key.to_owned(), 1));
            }
        }
    }
    Counts(order)
}

/// `value_counts` sorted ascending by value (weeks like "2024-W46").
pub fn sorted_value_counts<'a, I>(rows: I, col: SsaColumn) -> Counts
where
    I: IntoIterator<Item = &'a RawRow>,
{
    value_counts(rows, col).sorted_by_key()
}

/// Distinct non-missing, non-empty values, sorted. Filter dropdown options.
pub fn distinct_values<'a, I>(rows: I, col: SsaColumn) -> Vec<String>
where
    I: IntoIterator<Item = &'a RawRow>,
{
    rows.into_iter()
        .filter_map(|r| r.get(col))
        .filter(|v| !v.is_empty())
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

/// Number of distinct non-missing values (an empty string counts as one).
pub fn count_distinct<'a, I>(rows: I, col: SsaColumn) -> usize
where
    I: IntoIterator<Item = &'a RawRow>,
{
    rows.into_iter()
        .filter_map(|r| r.get(col))
        .collect::<HashSet<&str>>()
        .len()
}

/// Filter options for both responsible-party dropdowns.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct Responsaveis {
    pub programacao: Vec<String>,
    pub execucao: Vec<String>,
}

pub fn responsaveis(ds: &DataSet) -> Responsaveis {
    Responsaveis {
        programacao: distinct_values(ds.rows(), SsaColumn::ResponsavelProgramacao),
        execucao: distinct_values(ds.rows(), SsaColumn::ResponsavelExecucao),
    }
}

/// Status counts in encounter order.
pub fn state_counts(ds: &DataSet) -> Counts {
    value_counts(ds.rows(), SsaColumn::Situacao)
}

/// Scheduled-week counts, ascending by week.
pub fn programmed_by_week(ds: &DataSet) -> Counts {
    sorted_value_counts(ds.rows(), SsaColumn::SemanaProgramada)
}
