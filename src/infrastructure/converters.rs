//! Converters from wire models to domain values

use crate::{
    domain::{
        account::Address,
        duration::{self, Duration},
        restriction::{AccountRestriction, AccountRestrictionsInfo, RestrictionFlag},
    },
    infrastructure::models::{AccountRestrictionDto, AccountRestrictionsInfoDto},
    shared::error::AppResult,
};

/// Converter for transforming wire models into domain values
pub struct DtoMapping;

impl DtoMapping {
    /// Map an account restrictions info object, decoding every restriction's values
    pub fn extract_account_restriction_from_dto(
        dto: &AccountRestrictionsInfoDto,
    ) -> AppResult<AccountRestrictionsInfo> {
        let restrictions_dto = &dto.account_restrictions;
        let address = Address::from_encoded(&restrictions_dto.address)?;

        let restrictions = restrictions_dto
            .restrictions
            .iter()
            .map(Self::to_domain_restriction)
            .collect::<AppResult<Vec<_>>>()?;

        Ok(AccountRestrictionsInfo {
            version: restrictions_dto.version,
            address,
            restrictions,
        })
    }

    /// Map a single restriction record
    pub fn to_domain_restriction(dto: &AccountRestrictionDto) -> AppResult<AccountRestriction> {
        AccountRestriction::decode(RestrictionFlag::new(dto.restriction_flags), &dto.values)
    }

    /// Parse a duration token reported by the server
    pub fn parse_server_duration(value: &str) -> AppResult<Duration> {
        duration::parse(value)
    }
}
