/// One row of the structured-record kernel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub id: u64,
    pub name: String,
    pub value: u64,
    pub active: bool,
}

/// Builds `[0, 1, .., size - 1]` and sums it.
pub fn array_memory(size: usize) -> u64 {
    let values: Vec<u64> = (0..size as u64).collect();
    values.iter().sum()
}

/// Materializes `size` records, then sums their `value` fields.
pub fn record_build(size: usize) -> u64 {
    let records: Vec<Record> = (0..size as u64)
        .map(|i| Record {
            id: i,
            name: "Item".to_string(),
            value: i * 10,
            active: true,
        })
        .collect();
    records.iter().map(|r| r.value).sum()
}
