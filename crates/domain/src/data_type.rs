//! ZCL data type tags, spelled the way the bridge writes them in the
//! `"type"` field of an attribute report.

use std::fmt;
use std::str::FromStr;

macro_rules! define_data_types {
    ($($variant:ident => $wire:literal,)*) => {
        /// Data type tag attached to every attribute value the bridge reports.
        ///
        /// Tags the bridge may add later are kept verbatim in
        /// [`Other`](Self::Other) so decoding never fails on them.
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum DataType {
            $(
                #[doc = concat!("`", $wire, "`")]
                $variant,
            )*
            /// Any tag not listed above.
            Other(String),
        }

        impl DataType {
            /// The exact wire spelling of this tag.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $wire,)*
                    Self::Other(tag) => tag.as_str(),
                }
            }

            fn from_wire(tag: &str) -> Self {
                match tag {
                    $($wire => Self::$variant,)*
                    other => Self::Other(other.to_string()),
                }
            }
        }
    };
}

define_data_types! {
    NoData => "nodata",
    Data8 => "data8",
    Data16 => "data16",
    Data24 => "data24",
    Data32 => "data32",
    Data40 => "data40",
    Data56 => "data56",
    Data64 => "data64",
    Bool => "bool",
    Map8 => "map8",
    Map16 => "map16",
    Map24 => "map24",
    Map32 => "map32",
    Map40 => "map40",
    Map48 => "map48",
    Map56 => "map56",
    Map64 => "map64",
    Uint8 => "uint8",
    Uint16 => "uint16",
    Uint24 => "uint24",
    Uint32 => "uint32",
    Uint40 => "uint40",
    Uint48 => "uint48",
    Uint56 => "uint56",
    Uint64 => "uint64",
    Int8 => "int8",
    Int16 => "int16",
    Int24 => "int24",
    Int32 => "int32",
    Int40 => "int40",
    Int48 => "int48",
    Int56 => "int56",
    Int64 => "int64",
    Enum8 => "enum8",
    Enum16 => "enum16",
    Semi => "semi",
    Single => "single",
    Double => "double",
    OctStr => "octstr",
    CharString => "string",
    OctStr16 => "octstr16",
    CharString16 => "string16",
    Array => "array",
    Struct => "struct",
    Set => "set",
    Bag => "bag",
    TimeOfDay => "ToD",
    Date => "date",
    Utc => "UTC",
    ClusterId => "clusterId",
    AttribId => "attribId",
    BacOid => "bacOID",
    Eui64 => "EUI64",
    Key128 => "key128",
    Unknown => "unk",
    XiaomiFf01 => "xiaomi_ff01",
}

impl FromStr for DataType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_wire(s))
    }
}

impl From<String> for DataType {
    fn from(tag: String) -> Self {
        Self::from_wire(&tag)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_known_tags() {
        assert_eq!("bool".parse::<DataType>().unwrap(), DataType::Bool);
        assert_eq!("uint16".parse::<DataType>().unwrap(), DataType::Uint16);
        assert_eq!("int16".parse::<DataType>().unwrap(), DataType::Int16);
        assert_eq!("ToD".parse::<DataType>().unwrap(), DataType::TimeOfDay);
    }

    #[test]
    fn should_keep_unknown_tags_verbatim() {
        let data_type: DataType = "float128".parse().unwrap();
        assert_eq!(data_type, DataType::Other("float128".to_string()));
        assert_eq!(data_type.to_string(), "float128");
    }

    #[test]
    fn should_be_case_sensitive() {
        let data_type: DataType = "Bool".parse().unwrap();
        assert!(matches!(data_type, DataType::Other(_)));
    }

    #[test]
    fn should_display_wire_spelling() {
        assert_eq!(DataType::Utc.to_string(), "UTC");
        assert_eq!(DataType::Eui64.to_string(), "EUI64");
        assert_eq!(DataType::XiaomiFf01.to_string(), "xiaomi_ff01");
    }

    #[test]
    fn should_convert_owned_tag() {
        assert_eq!(DataType::from("int16".to_string()), DataType::Int16);
        assert_eq!(
            DataType::from("xiaomi_ff02".to_string()),
            DataType::Other("xiaomi_ff02".to_string())
        );
    }
}
