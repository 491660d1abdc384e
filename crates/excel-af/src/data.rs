//! Values laid out for a table fill

use excel_com_protocol::CellValue;

/// Values addressed by (longitudinal, transverse) shift.
///
/// Each line holds the values for one longitudinal position, listed along the
/// transverse axis. Lines may be ragged; positions without a value read as
/// [`CellValue::Null`], which clears the cell when the table is filled.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableData {
    lines: Vec<Vec<CellValue>>,
}

impl TableData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_lines(lines: Vec<Vec<CellValue>>) -> Self {
        Self { lines }
    }

    /// One line per pair: the key at transverse 0, the value at transverse 1.
    ///
    /// ```
    /// use excel_af::{CellValue, TableData};
    ///
    /// let data = TableData::from_pairs([("apples", 3), ("pears", 5)]);
    /// assert_eq!(data.value(1, 0), CellValue::from("pears"));
    /// assert_eq!(data.value(1, 1), CellValue::Number(5.0));
    /// assert_eq!(data.value(1, 2), CellValue::Null);
    /// ```
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<CellValue>,
        V: Into<CellValue>,
    {
        Self {
            lines: pairs
                .into_iter()
                .map(|(k, v)| vec![k.into(), v.into()])
                .collect(),
        }
    }

    pub fn push_line<I, V>(&mut self, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        self.lines
            .push(values.into_iter().map(Into::into).collect());
    }

    /// Value at a position, or `Null` if none was given
    pub fn value(&self, longitudinal: usize, transverse: usize) -> CellValue {
        self.lines
            .get(longitudinal)
            .and_then(|line| line.get(transverse))
            .cloned()
            .unwrap_or_default()
    }

    /// Number of lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl<V: Into<CellValue>> FromIterator<Vec<V>> for TableData {
    fn from_iter<T: IntoIterator<Item = Vec<V>>>(iter: T) -> Self {
        Self {
            lines: iter
                .into_iter()
                .map(|line| line.into_iter().map(Into::into).collect())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ragged_lines() {
        let mut data = TableData::new();
        data.push_line([1.0, 2.0, 3.0]);
        data.push_line([4.0]);

        assert_eq!(data.len(), 2);
        assert_eq!(data.value(0, 2), CellValue::Number(3.0));
        assert_eq!(data.value(1, 0), CellValue::Number(4.0));
        assert_eq!(data.value(1, 1), CellValue::Null);
        assert_eq!(data.value(5, 0), CellValue::Null);
    }

    #[test]
    fn test_collect_from_vectors() {
        let data: TableData = vec![vec!["a", "b"], vec!["c"]].into_iter().collect();
        assert_eq!(data.value(0, 1), CellValue::String("b".into()));
        assert!(!data.is_empty());
        assert!(TableData::default().is_empty());
    }
}
