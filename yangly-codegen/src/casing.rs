//! Identifier case conversion.

/// Converts a hyphen or underscore delimited identifier to PascalCase.
///
/// The first character of every segment is uppercased and the delimiters are
/// dropped; the rest of each segment is kept as is.
#[must_use]
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = true;

    for c in s.chars() {
        if c == '_' || c == '-' {
            capitalize_next = true;
        } else if capitalize_next {
            result.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("device"), "Device");
        assert_eq!(to_pascal_case("ietf-interfaces"), "IetfInterfaces");
        assert_eq!(to_pascal_case("acme_device-mgmt"), "AcmeDeviceMgmt");
    }

    #[test]
    fn test_to_pascal_case_keeps_inner_case() {
        assert_eq!(to_pascal_case("openconfig-bgpTypes"), "OpenconfigBgpTypes");
        assert_eq!(to_pascal_case("x-VLAN"), "XVLAN");
    }

    #[test]
    fn test_to_pascal_case_edge_cases() {
        assert_eq!(to_pascal_case(""), "");
        assert_eq!(to_pascal_case("--"), "");
        assert_eq!(to_pascal_case("a--b__c"), "ABC");
        assert_eq!(to_pascal_case("-leading"), "Leading");
    }
}
