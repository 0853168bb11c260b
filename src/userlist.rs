use log::debug;

// Marker lines that switch the active category. Compared against the raw
// line, before any trimming, so a stray carriage return on the marker line
// itself does not match.
const SLINK_MARKER: &str = "SLink:";
const ELINK_MARKER: &str = "ELink:";

/// Which table a parsed name belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Category {
    ELink,
    SLink,
}

/// The two ordered name lists parsed from one input document.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct UserList {
    pub elink: Vec<String>,
    pub slink: Vec<String>,
}

impl UserList {
    /// Parse an input document into its two category lists.
    ///
    /// Lines are split on raw `\n`. Marker lines switch the active category
    /// and emit nothing; every other non-empty line is trimmed and appended
    /// to the active list. Lines before the first marker belong to ELink.
    pub fn parse(text: &str) -> UserList {
        let mut list = UserList::default();
        let mut current = Category::ELink;

        for line in text.split('\n') {
            match line {
                SLINK_MARKER => current = Category::SLink,
                ELINK_MARKER => current = Category::ELink,
                "" => {}
                _ => {
                    let name = line.trim().to_string();
                    match current {
                        Category::ELink => list.elink.push(name),
                        Category::SLink => list.slink.push(name),
                    }
                }
            }
        }

        debug!(
            "Parsed {} ELink and {} SLink user name(s)",
            list.elink.len(),
            list.slink.len()
        );
        list
    }
}
