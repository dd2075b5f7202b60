/// Instrument bit flags used in the `Instr` column.
pub const INSTRUMENTS: &[(&str, u32)] = &[
    ("LRISb", 1 << 0),
    ("LRISr", 1 << 1),
    ("Kastb", 1 << 2),
    ("Kastr", 1 << 3),
    ("DEIMOS", 1 << 4),
    ("NIRSPEC", 1 << 5),
    ("GMOS", 1 << 6),
    ("DBSP", 1 << 7),
];

/// Ion bit flags used in the `line_flag` column of unidentified lines.
pub const IONS: &[(&str, u32)] = &[
    ("ArI", 1 << 0),
    ("HgI", 1 << 1),
    ("KrI", 1 << 2),
    ("NeI", 1 << 3),
    ("XeI", 1 << 4),
    ("CdI", 1 << 5),
    ("ZnI", 1 << 6),
    ("HeI", 1 << 7),
    ("OH", 1 << 8),
];

/// Name of the unidentified-lines list.
pub const UNKNOWN_ION: &str = "UNKNWN";

pub const ION_STR_LEN: usize = 6;
pub const SOURCE_STR_LEN: usize = 30;

pub fn instrument_flag(name: &str) -> Option<u32> {
    lookup(INSTRUMENTS, name)
}

pub fn ion_flag(name: &str) -> Option<u32> {
    lookup(IONS, name)
}

fn lookup(table: &[(&str, u32)], name: &str) -> Option<u32> {
    table.iter().find(|(n, _)| *n == name).map(|(_, f)| *f)
}

/// True when single-bit `flag` is set in `value`.
pub fn has_flag(value: u32, flag: u32) -> bool {
    flag != 0 && value % (2 * flag) >= flag
}

/// Names in `table` whose flag is set in `value`, in table order.
pub fn flag_names(table: &'static [(&'static str, u32)], value: u32) -> Vec<&'static str> {
    table
        .iter()
        .filter(|(_, f)| has_flag(value, *f))
        .map(|(n, _)| *n)
        .collect()
}
