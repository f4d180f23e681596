//! Structural type to comparison group mapping.

use crate::core::{StructuralType, TypeGroup};

/// Comparison group of a structural type, `None` for unsupported types.
pub fn type_group(structural_type: &StructuralType) -> Option<TypeGroup> {
    match structural_type {
        StructuralType::MultiUnitResidential | StructuralType::DetachedResidential => {
            Some(TypeGroup::Residential)
        }
        StructuralType::Apartment => Some(TypeGroup::Apartment),
        StructuralType::StudioApartment => Some(TypeGroup::StudioApartment),
        StructuralType::Commercial => Some(TypeGroup::Commercial),
        StructuralType::Building => Some(TypeGroup::Building),
        StructuralType::Land => Some(TypeGroup::Land),
        StructuralType::Office => Some(TypeGroup::Office),
        StructuralType::Unsupported(_) => None,
    }
}

/// Whether two structural types belong to the same comparison group.
///
/// Unsupported types never match anything, including themselves.
pub fn same_group(a: &StructuralType, b: &StructuralType) -> bool {
    match (type_group(a), type_group(b)) {
        (Some(ga), Some(gb)) => ga == gb,
        _ => false,
    }
}
