//! The built-in catalog of registrable entity types.

use rolodex_model::{
    Account, AccountDto, Address, AddressDto, Organization, OrganizationDto, SubAccount,
    SubAccountDto, User, UserDto,
};
use rolodex_types::TypeDescriptor;

/// Descriptors for every built-in domain and wire-format entity type.
///
/// This list is closed and fixed at build time. The names it carries are
/// the wire contract: external serializers and repositories encode entity
/// kind as exactly these strings, and the registry bootstrap registers them
/// exactly once per lifetime.
#[must_use]
pub fn builtin_descriptors() -> [TypeDescriptor; 10] {
    [
        TypeDescriptor::of::<Account>(),
        TypeDescriptor::of::<SubAccount>(),
        TypeDescriptor::of::<User>(),
        TypeDescriptor::of::<Organization>(),
        TypeDescriptor::of::<Address>(),
        TypeDescriptor::of::<AccountDto>(),
        TypeDescriptor::of::<SubAccountDto>(),
        TypeDescriptor::of::<UserDto>(),
        TypeDescriptor::of::<OrganizationDto>(),
        TypeDescriptor::of::<AddressDto>(),
    ]
}
