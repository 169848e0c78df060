use serde::Serialize;

/// An entry of the static department catalogue.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct Department {
    pub id: &'static str,
    pub name: &'static str,
}

/// The department catalogue. Selector contents and the reference set for
/// department-id validation.
pub const DEPARTMENTS: [Department; 5] = [
    Department {
        id: "PB01",
        name: "Phòng Kế toán",
    },
    Department {
        id: "PB02",
        name: "Phòng Nhân sự",
    },
    Department {
        id: "PB03",
        name: "Phòng Kinh doanh",
    },
    Department {
        id: "PB04",
        name: "Phòng Kỹ thuật",
    },
    Department {
        id: "PB05",
        name: "Ban Giám đốc",
    },
];

/// Whether `id` references a catalogue entry.
pub fn is_known(id: &str) -> bool {
    DEPARTMENTS.iter().any(|d| d.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_ids_are_accepted() {
        assert!(is_known("PB01"));
        assert!(is_known("PB05"));
    }

    #[test]
    fn empty_and_unknown_ids_are_rejected() {
        assert!(!is_known(""));
        assert!(!is_known("PB99"));
        assert!(!is_known("pb01"));
    }
}
