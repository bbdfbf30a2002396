//! Display names for well-known object identifiers.
//!
//! The table keeps only the last two parts of each identifier's full name
//! so the rendered output stays readable.

/// The type of a name lookup function handed to the walker.
pub type NameLookup = fn(&str) -> Option<&'static str>;

/// Returns the display name of an object identifier in dotted form.
pub fn lookup(oid: &str) -> Option<&'static str> {
    NAMES.binary_search_by_key(&oid, |&(key, _)| key).ok().map(|idx| {
        NAMES[idx].1
    })
}

/// Well-known object identifiers, sorted by their dotted form.
static NAMES: &[(&str, &str)] = &[
    ("1.2.840.113549.1.1.1", "pkcs-1(1) rsaEncryption(1)"),
    ("1.2.840.113549.1.1.11", "pkcs-1(1) sha256WithRSAEncryption(11)"),
    ("1.2.840.113549.1.1.5", "pkcs-1(1) sha1-with-rsa-signature(5)"),
    ("1.2.840.113549.1.7.1", "pkcs-7(7) data(1)"),
    ("1.2.840.113549.1.7.2", "pkcs-7(7) signedData(2)"),
    ("1.2.840.113549.1.9.1", "pkcs-9(9) emailAddress(1)"),
    ("1.2.840.113549.1.9.15", "pkcs-9(9) smimeCapabilities(15)"),
    ("1.2.840.113549.1.9.3", "pkcs-9(9) contentType(3)"),
    ("1.2.840.113549.1.9.4", "pkcs-9(9) messageDigest(4)"),
    ("1.2.840.113549.1.9.5", "pkcs-9(9) signing-time(5)"),
    ("1.2.840.113549.3.2", "encryptionalgorithm(3) rc2-cbc(2)"),
    ("1.2.840.113549.3.7", "encryptionalgorithm(3) des-ede3-cbc(7)"),
    ("1.3.14.3.2.7", "algorithms(2) desCBC(7)"),
    (
        "1.3.6.1.4.1.311.10.3.12",
        "Microsoft Enhanced Key Usage - document signing"
    ),
    (
        "1.3.6.1.4.1.311.10.3.4",
        "Microsoft Enhanced Key Usage - can use encrypted file system"
    ),
    (
        "1.3.6.1.4.1.311.20.2.2",
        "Microsoft Enhanced Key Usage - smartcard logon"
    ),
    (
        "1.3.6.1.4.1.311.21.6",
        "Microsoft Enhanced Key Usage - key recovery agent"
    ),
    ("1.3.6.1.4.1.4146.1.40", "certificate-policies(1) client-certificate(40)"),
    ("1.3.6.1.4.1.4146.1.40.10", "client-certificate(40) ePKI(10)"),
    ("1.3.6.1.4.1.4146.1.95", "certificate-policies(1) ocsp(95)"),
    ("1.3.6.1.5.5.7.1.1", "pe(1) authorityInfoAccess(1)"),
    ("1.3.6.1.5.5.7.2.1", "qt(2) cps(1)"),
    ("1.3.6.1.5.5.7.3.17", "kp(3) id-kp-ipsecIKE(17)"),
    ("1.3.6.1.5.5.7.3.2", "kp(3) clientAuth(2)"),
    ("1.3.6.1.5.5.7.3.4", "kp(3) emailProtection(4)"),
    ("1.3.6.1.5.5.7.3.7", "kp(3) id-kp-ipsecUser(7)"),
    ("1.3.6.1.5.5.7.3.9", "kp(3) ocspSigning(9)"),
    ("1.3.6.1.5.5.7.48.1", "ad(48) ocsp(1)"),
    ("1.3.6.1.5.5.7.48.2", "ad(48) caIssuers(2)"),
    ("2.16.840.1.101.3.4.1.2", "aes(1) aes128-CBC(2)"),
    ("2.16.840.1.101.3.4.1.22", "aes(1) aes192-CBC(22)"),
    ("2.16.840.1.101.3.4.1.42", "aes(1) aes256-CBC(42)"),
    ("2.16.840.1.101.3.4.2.1", "hashAlgs(2) sha256(1)"),
    ("2.5.29.14", "certificateExtension(29) subjectKeyIdentifier(14)"),
    ("2.5.29.15", "certificateExtension(29) keyUsage(15)"),
    ("2.5.29.17", "certificateExtension(29) subjectAltName(17)"),
    ("2.5.29.19", "certificateExtension(29) basicConstraints(19)"),
    ("2.5.29.31", "certificateExtension(29) cRLDistributionPoints(31)"),
    ("2.5.29.32", "certificateExtension(29) certificatePolicies(32)"),
    ("2.5.29.35", "certificateExtension(29) authorityKeyIdentifier(35)"),
    ("2.5.29.37", "certificateExtension(29) extKeyUsage(37)"),
    ("2.5.4.10", "attributeType(4) organizationName(10)"),
    ("2.5.4.11", "attributeType(4) organizationalUnitName(11)"),
    ("2.5.4.3", "attributeType(4) commonName(3)"),
    ("2.5.4.6", "attributeType(4) countryName(6)"),
    ("2.5.4.7", "attributeType(4) localityName(7)"),
    ("2.5.4.8", "attributeType(4) stateOrProvinceName(8)"),
];


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn table_is_sorted() {
        assert!(NAMES.windows(2).all(|pair| pair[0].0 < pair[1].0));
    }

    #[test]
    fn known_identifiers() {
        assert_eq!(
            lookup("1.2.840.113549.1.1.1"),
            Some("pkcs-1(1) rsaEncryption(1)")
        );
        assert_eq!(
            lookup("2.5.4.3"), Some("attributeType(4) commonName(3)")
        );
        assert_eq!(
            lookup("2.5.29.19"),
            Some("certificateExtension(29) basicConstraints(19)")
        );
    }

    #[test]
    fn unknown_identifiers() {
        assert_eq!(lookup("9.9.9"), None);
        assert_eq!(lookup(""), None);
        assert_eq!(lookup("1.2.840.113549.1.1"), None);
    }
}
