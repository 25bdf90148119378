//! The built-in specification table.
//!
//! One record per supported country or network code. Records are grouped the
//! way the registry publishes them; lookups go through [`crate::Registry`],
//! so the order here carries no meaning.
use crate::crypto::CryptoClass;
use crate::registry::SpecEntry;

/// Every specification shipped with the crate.
#[rustfmt::skip]
pub(crate) static BUILTIN: &[SpecEntry] = &[
    SpecEntry::new("AD", 24, "F04F04A12", CryptoClass::NotCrypto, "AD1200012030200359100100"),
    SpecEntry::new("AE", 23, "F03F16", CryptoClass::NotCrypto, "AE070331234567890123456"),
    SpecEntry::new("AL", 28, "F08A16", CryptoClass::NotCrypto, "AL47212110090000000235698741"),
    SpecEntry::new("AT", 20, "F05F11", CryptoClass::NotCrypto, "AT611904300234573201"),
    SpecEntry::new("AZ", 28, "U04A20", CryptoClass::NotCrypto, "AZ21NABZ00000000137010001944"),
    SpecEntry::new("BA", 20, "F03F03F08F02", CryptoClass::NotCrypto, "BA391290079401028494"),
    SpecEntry::new("BE", 16, "F03F07F02", CryptoClass::NotCrypto, "BE68539007547034"),
    SpecEntry::new("BG", 22, "U04F04F02A08", CryptoClass::NotCrypto, "BG80BNBG96611020345678"),
    SpecEntry::new("BH", 22, "U04A14", CryptoClass::NotCrypto, "BH67BMAG00001299123456"),
    SpecEntry::new("BR", 29, "F08F05F10U01A01", CryptoClass::NotCrypto, "BR9700360305000010009795493P1"),
    SpecEntry::new("BY", 28, "A04F04A16", CryptoClass::NotCrypto, "BY13NBRB3600900000002Z00AB00"),
    SpecEntry::new("CH", 21, "F05A12", CryptoClass::NotCrypto, "CH9300762011623852957"),
    SpecEntry::new("CR", 22, "F04F14", CryptoClass::NotCrypto, "CR72012300000171549015"),
    SpecEntry::new("CY", 28, "F03F05A16", CryptoClass::NotCrypto, "CY17002001280000001200527600"),
    SpecEntry::new("CZ", 24, "F04F06F10", CryptoClass::NotCrypto, "CZ6508000000192000145399"),
    SpecEntry::new("DE", 22, "F08F10", CryptoClass::NotCrypto, "DE89370400440532013000"),
    SpecEntry::new("DK", 18, "F04F09F01", CryptoClass::NotCrypto, "DK5000400440116243"),
    SpecEntry::new("DO", 28, "U04F20", CryptoClass::NotCrypto, "DO28BAGR00000001212453611324"),
    SpecEntry::new("EE", 20, "F02F02F11F01", CryptoClass::NotCrypto, "EE382200221020145685"),
    SpecEntry::new("EG", 29, "F04F04F17", CryptoClass::NotCrypto, "EG800002000156789012345180002"),
    SpecEntry::new("ES", 24, "F04F04F01F01F10", CryptoClass::NotCrypto, "ES9121000418450200051332"),
    SpecEntry::new("FI", 18, "F06F07F01", CryptoClass::NotCrypto, "FI2112345600000785"),
    SpecEntry::new("FO", 18, "F04F09F01", CryptoClass::NotCrypto, "FO6264600001631634"),
    SpecEntry::new("FR", 27, "F05F05A11F02", CryptoClass::NotCrypto, "FR1420041010050500013M02606"),
    SpecEntry::new("GB", 22, "U04F06F08", CryptoClass::NotCrypto, "GB29NWBK60161331926819"),
    SpecEntry::new("GE", 22, "U02F16", CryptoClass::NotCrypto, "GE29NB0000000101904917"),
    SpecEntry::new("GI", 23, "U04A15", CryptoClass::NotCrypto, "GI75NWBK000000007099453"),
    SpecEntry::new("GL", 18, "F04F09F01", CryptoClass::NotCrypto, "GL8964710001000206"),
    SpecEntry::new("GR", 27, "F03F04A16", CryptoClass::NotCrypto, "GR1601101250000000012300695"),
    SpecEntry::new("GT", 28, "A04A20", CryptoClass::NotCrypto, "GT82TRAJ01020000001210029690"),
    SpecEntry::new("HR", 21, "F07F10", CryptoClass::NotCrypto, "HR1210010051863000160"),
    SpecEntry::new("HU", 28, "F03F04F01F15F01", CryptoClass::NotCrypto, "HU42117730161111101800000000"),
    SpecEntry::new("IE", 22, "U04F06F08", CryptoClass::NotCrypto, "IE29AIBK93115212345678"),
    SpecEntry::new("IL", 23, "F03F03F13", CryptoClass::NotCrypto, "IL620108000000099999999"),
    SpecEntry::new("IS", 26, "F04F02F06F10", CryptoClass::NotCrypto, "IS140159260076545510730339"),
    SpecEntry::new("IT", 27, "U01F05F05A12", CryptoClass::NotCrypto, "IT60X0542811101000000123456"),
    SpecEntry::new("IQ", 23, "U04F03A12", CryptoClass::NotCrypto, "IQ98NBIQ850123456789012"),
    SpecEntry::new("JO", 30, "A04F22", CryptoClass::NotCrypto, "JO15AAAA1234567890123456789012"),
    SpecEntry::new("KW", 30, "U04A22", CryptoClass::NotCrypto, "KW81CBKU0000000000001234560101"),
    SpecEntry::new("KZ", 20, "F03A13", CryptoClass::NotCrypto, "KZ86125KZT5004100100"),
    SpecEntry::new("LB", 28, "F04A20", CryptoClass::NotCrypto, "LB62099900000001001901229114"),
    SpecEntry::new("LC", 32, "U04F24", CryptoClass::NotCrypto, "LC07HEMM000100010012001200013015"),
    SpecEntry::new("LI", 21, "F05A12", CryptoClass::NotCrypto, "LI21088100002324013AA"),
    SpecEntry::new("LT", 20, "F05F11", CryptoClass::NotCrypto, "LT121000011101001000"),
    SpecEntry::new("LU", 20, "F03A13", CryptoClass::NotCrypto, "LU280019400644750000"),
    SpecEntry::new("LV", 21, "U04A13", CryptoClass::NotCrypto, "LV80BANK0000435195001"),
    SpecEntry::new("MC", 27, "F05F05A11F02", CryptoClass::NotCrypto, "MC5811222000010123456789030"),
    SpecEntry::new("MD", 24, "U02A18", CryptoClass::NotCrypto, "MD24AG000225100013104168"),
    SpecEntry::new("ME", 22, "F03F13F02", CryptoClass::NotCrypto, "ME25505000012345678951"),
    SpecEntry::new("MK", 19, "F03A10F02", CryptoClass::NotCrypto, "MK07250120000058984"),
    SpecEntry::new("MR", 27, "F05F05F11F02", CryptoClass::NotCrypto, "MR1300020001010000123456753"),
    SpecEntry::new("MT", 31, "U04F05A18", CryptoClass::NotCrypto, "MT84MALT011000012345MTLCAST001S"),
    SpecEntry::new("MU", 30, "U04F02F02F12F03U03", CryptoClass::NotCrypto, "MU17BOMM0101101030300200000MUR"),
    SpecEntry::new("NL", 18, "U04F10", CryptoClass::NotCrypto, "NL91ABNA0417164300"),
    SpecEntry::new("NO", 15, "F04F06F01", CryptoClass::NotCrypto, "NO9386011117947"),
    SpecEntry::new("PK", 24, "U04A16", CryptoClass::NotCrypto, "PK36SCBL0000001123456702"),
    SpecEntry::new("PL", 28, "F08F16", CryptoClass::NotCrypto, "PL61109010140000071219812874"),
    SpecEntry::new("PS", 29, "U04A21", CryptoClass::NotCrypto, "PS92PALS000000000400123456702"),
    SpecEntry::new("PT", 25, "F04F04F11F02", CryptoClass::NotCrypto, "PT50000201231234567890154"),
    SpecEntry::new("QA", 29, "U04A21", CryptoClass::NotCrypto, "QA30AAAA123456789012345678901"),
    SpecEntry::new("RO", 24, "U04A16", CryptoClass::NotCrypto, "RO49AAAA1B31007593840000"),
    SpecEntry::new("RS", 22, "F03F13F02", CryptoClass::NotCrypto, "RS35260005601001611379"),
    SpecEntry::new("SA", 24, "F02A18", CryptoClass::NotCrypto, "SA0380000000608010167519"),
    SpecEntry::new("SC", 31, "U04F04F16U03", CryptoClass::NotCrypto, "SC18SSCB11010000000000001497USD"),
    SpecEntry::new("SE", 24, "F03F16F01", CryptoClass::NotCrypto, "SE4550000000058398257466"),
    SpecEntry::new("SI", 19, "F05F08F02", CryptoClass::NotCrypto, "SI56263300012039086"),
    SpecEntry::new("SK", 24, "F04F06F10", CryptoClass::NotCrypto, "SK3112000000198742637541"),
    SpecEntry::new("SM", 27, "U01F05F05A12", CryptoClass::NotCrypto, "SM86U0322509800000000270100"),
    SpecEntry::new("ST", 25, "F08F11F02", CryptoClass::NotCrypto, "ST68000100010051845310112"),
    SpecEntry::new("SV", 28, "U04F20", CryptoClass::NotCrypto, "SV62CENR00000000000000700025"),
    SpecEntry::new("TL", 23, "F03F14F02", CryptoClass::NotCrypto, "TL380080012345678910157"),
    SpecEntry::new("TN", 24, "F02F03F13F02", CryptoClass::NotCrypto, "TN5910006035183598478831"),
    SpecEntry::new("TR", 26, "F05F01A16", CryptoClass::NotCrypto, "TR330006100519786457841326"),
    SpecEntry::new("UA", 29, "F25", CryptoClass::NotCrypto, "UA511234567890123456789012345"),
    SpecEntry::new("VA", 22, "F18", CryptoClass::NotCrypto, "VA59001123000012345678"),
    SpecEntry::new("VG", 24, "U04F16", CryptoClass::NotCrypto, "VG96VPVG0000012345678901"),
    SpecEntry::new("XK", 20, "F04F10F02", CryptoClass::NotCrypto, "XK051212012345678906"),

    // Not part of the official registry, but following the same scheme.
    // Angola
    SpecEntry::new("AO", 25, "F21", CryptoClass::NotCrypto, "AO69123456789012345678901"),
    // Burkina Faso
    SpecEntry::new("BF", 27, "F23", CryptoClass::NotCrypto, "BF2312345678901234567890123"),
    // Burundi
    SpecEntry::new("BI", 16, "F12", CryptoClass::NotCrypto, "BI41123456789012"),
    // Benin
    SpecEntry::new("BJ", 28, "F24", CryptoClass::NotCrypto, "BJ39123456789012345678901234"),
    // Ivory Coast
    SpecEntry::new("CI", 28, "U02F22", CryptoClass::NotCrypto, "CI70CI1234567890123456789012"),
    // Cameroon
    SpecEntry::new("CM", 27, "F23", CryptoClass::NotCrypto, "CM9012345678901234567890123"),
    // Cape Verde
    SpecEntry::new("CV", 25, "F21", CryptoClass::NotCrypto, "CV30123456789012345678901"),
    // Algeria
    SpecEntry::new("DZ", 24, "F20", CryptoClass::NotCrypto, "DZ8612345678901234567890"),
    // Iran
    SpecEntry::new("IR", 26, "F22", CryptoClass::NotCrypto, "IR861234568790123456789012"),
    // Madagascar
    SpecEntry::new("MG", 27, "F23", CryptoClass::NotCrypto, "MG1812345678901234567890123"),
    // Mali
    SpecEntry::new("ML", 28, "U01F23", CryptoClass::NotCrypto, "ML15A12345678901234567890123"),
    // Mozambique
    SpecEntry::new("MZ", 25, "F21", CryptoClass::NotCrypto, "MZ25123456789012345678901"),
    // Senegal
    SpecEntry::new("SN", 28, "U01F23", CryptoClass::NotCrypto, "SN52A12345678901234567890123"),

    // French overseas subdivisions, sharing the FR structure.
    SpecEntry::new("GF", 27, "F05F05A11F02", CryptoClass::NotCrypto, "GF121234512345123456789AB13"),
    SpecEntry::new("GP", 27, "F05F05A11F02", CryptoClass::NotCrypto, "GP791234512345123456789AB13"),
    SpecEntry::new("MQ", 27, "F05F05A11F02", CryptoClass::NotCrypto, "MQ221234512345123456789AB13"),
    SpecEntry::new("RE", 27, "F05F05A11F02", CryptoClass::NotCrypto, "RE131234512345123456789AB13"),
    SpecEntry::new("PF", 27, "F05F05A11F02", CryptoClass::NotCrypto, "PF281234512345123456789AB13"),
    SpecEntry::new("TF", 27, "F05F05A11F02", CryptoClass::NotCrypto, "TF891234512345123456789AB13"),
    SpecEntry::new("YT", 27, "F05F05A11F02", CryptoClass::NotCrypto, "YT021234512345123456789AB13"),
    SpecEntry::new("NC", 27, "F05F05A11F02", CryptoClass::NotCrypto, "NC551234512345123456789AB13"),
    SpecEntry::new("BL", 27, "F05F05A11F02", CryptoClass::NotCrypto, "BL391234512345123456789AB13"),
    SpecEntry::new("MF", 27, "F05F05A11F02", CryptoClass::NotCrypto, "MF551234512345123456789AB13"),
    SpecEntry::new("PM", 27, "F05F05A11F02", CryptoClass::NotCrypto, "PM071234512345123456789AB13"),
    SpecEntry::new("WF", 27, "F05F05A11F02", CryptoClass::NotCrypto, "WF621234512345123456789AB13"),

    // Digital asset networks.
    // Core Blockchain - Mainnet
    SpecEntry::new("CB", 44, "H40", CryptoClass::Main, "CB661234567890ABCDEF1234567890ABCDEF12345678"),
    // Core Blockchain - Testnet [Devín]
    SpecEntry::new("AB", 44, "H40", CryptoClass::Test, "AB841234567890ABCDEF1234567890ABCDEF12345678"),
    // Core Blockchain - Enterprise [Koliba]
    SpecEntry::new("CE", 44, "H40", CryptoClass::Enter, "CE571234567890ABCDEF1234567890ABCDEF12345678"),
];
