//! Contact-model records for Rolodex.
//!
//! Plain attribute-bag types with no behavior beyond field access:
//! - domain records — [`Account`], [`SubAccount`], [`User`],
//!   [`Organization`], [`Address`], plus the [`EmailAddress`] and
//!   [`PhoneNumber`] value shapes
//! - wire DTOs — the transfer counterparts serialized with camelCase keys
//!   for the external SDK contract
//!
//! Every record and DTO implements `Registrable` with its catalog name, so
//! the registry in `rolodex-registry` can resolve entity-kind strings to
//! these concrete types. The linking shapes ([`SubAccount`], [`Address`]
//! and their DTOs) embed a `LinkedReference` and implement `Linked`.
//!
//! Business/CRUD orchestration, persistence, and transport live in
//! surrounding layers, not here.

mod account;
mod contact;
mod dto;
mod organization;

pub use account::{Account, SubAccount};
pub use contact::{EmailAddress, PhoneNumber, User};
pub use dto::{
    AccountDto, AddressDto, EmailAddressDto, OrganizationDto, PhoneNumberDto, SubAccountDto,
    UserDto,
};
pub use organization::{Address, Organization};
