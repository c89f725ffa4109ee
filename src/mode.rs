//! Mode bit decoding into the familiar `drwxr-xr-x` form

/// File type characters indexed by the type nibble (bits 12-15).
const FILE_TYPES: [char; 16] = [
    '.', 'p', 'c', '?', 'd', '?', 'b', '?', '-', '?', 'l', '?', 's', '?', '?', '?',
];

/// Permission triplets indexed by a 3-bit octal digit.
const PERMS: [&str; 8] = ["---", "--x", "-w-", "-wx", "r--", "r-x", "rw-", "rwx"];

const TYPE_MASK: u32 = 0o170000;
const TYPE_DIR: u32 = 0o040000;

const SETUID: u32 = 0o4000;
const SETGID: u32 = 0o2000;
const STICKY: u32 = 0o1000;

/// Format raw mode bits as a 10-character permission string.
///
/// The first character is the file type, followed by the owner, group and
/// other triplets. Special bits replace the execute slot of their triplet:
/// setuid/setgid show as `s` (or `S` without execute), sticky as `t`/`T`.
///
/// ```
/// assert_eq!(myls::format_mode(0o100644), "-rw-r--r--");
/// assert_eq!(myls::format_mode(0o041777), "drwxrwxrwt");
/// ```
pub fn format_mode(mode: u32) -> String {
    let mut owner = triplet(mode >> 6);
    let mut group = triplet(mode >> 3);
    let mut other = triplet(mode);

    if mode & STICKY != 0 {
        mark_special(&mut other, 't');
    }
    if mode & SETUID != 0 {
        mark_special(&mut owner, 's');
    }
    if mode & SETGID != 0 {
        mark_special(&mut group, 's');
    }

    let mut out = String::with_capacity(10);
    out.push(file_type_char(mode));
    out.extend(owner.iter().chain(&group).chain(&other));
    out
}

/// Type character for the mode's type nibble.
pub fn file_type_char(mode: u32) -> char {
    FILE_TYPES[((mode & TYPE_MASK) >> 12) as usize]
}

pub fn is_dir(mode: u32) -> bool {
    mode & TYPE_MASK == TYPE_DIR
}

fn triplet(bits: u32) -> [char; 3] {
    let mut chars = ['-'; 3];
    for (slot, ch) in chars.iter_mut().zip(PERMS[(bits & 0o7) as usize].chars()) {
        *slot = ch;
    }
    chars
}

/// Replace the execute slot: lowercase when execute was set, uppercase otherwise.
fn mark_special(triplet: &mut [char; 3], lower: char) {
    triplet[2] = if triplet[2] == 'x' {
        lower
    } else {
        lower.to_ascii_uppercase()
    };
}
