// Authority Derivation
//
// Every custody record and every signer that moves custody funds lives at a
// program-derived address: tag + identifying seeds + a bump that pushes the
// address off the ed25519 curve, so no private key exists for it.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::pubkey::{MAX_SEEDS, MAX_SEED_LEN};

use crate::{constants::*, errors::CustodyError};

// Derive (address, bump) for `tag` followed by `seeds` under this program.
pub fn derive(tag: &[u8], seeds: &[&[u8]]) -> core::result::Result<(Pubkey, u8), CustodyError> {
    derive_for_program(tag, seeds, &crate::ID)
}

fn derive_for_program(
    tag: &[u8],
    seeds: &[&[u8]],
    program_id: &Pubkey,
) -> core::result::Result<(Pubkey, u8), CustodyError> {
    // tag and bump each take one seed slot
    if seeds.len() + 2 > MAX_SEEDS {
        return Err(CustodyError::InvalidSeed);
    }
    if tag.len() > MAX_SEED_LEN || seeds.iter().any(|seed| seed.len() > MAX_SEED_LEN) {
        return Err(CustodyError::InvalidSeed);
    }

    let mut all_seeds: Vec<&[u8]> = Vec::with_capacity(seeds.len() + 1);
    all_seeds.push(tag);
    all_seeds.extend_from_slice(seeds);

    Pubkey::try_find_program_address(&all_seeds, program_id)
        .ok_or(CustodyError::SeedSpaceExhausted)
}

// Address helpers, one per record / signer kind

pub fn swap_address(maker: &Pubkey, seed: u64) -> core::result::Result<(Pubkey, u8), CustodyError> {
    derive(SWAP_SEED, &[maker.as_ref(), &seed.to_le_bytes()])
}

pub fn vault_state_address(
    seed: u64,
    maker: &Pubkey,
    taker: &Pubkey,
) -> core::result::Result<(Pubkey, u8), CustodyError> {
    derive(VAULT_STATE_SEED, &[&seed.to_le_bytes(), maker.as_ref(), taker.as_ref()])
}

pub fn campaign_address(maker: &Pubkey, mint: &Pubkey) -> core::result::Result<(Pubkey, u8), CustodyError> {
    derive(CAMPAIGN_SEED, &[maker.as_ref(), mint.as_ref()])
}

pub fn pool_address(seed: u64) -> core::result::Result<(Pubkey, u8), CustodyError> {
    derive(POOL_SEED, &[&seed.to_le_bytes()])
}

pub fn lp_mint_address(pool: &Pubkey) -> core::result::Result<(Pubkey, u8), CustodyError> {
    derive(LP_MINT_SEED, &[pool.as_ref()])
}

// Signer for the funds held on behalf of `instance`
pub fn authority_address(
    domain: &[u8],
    instance: &Pubkey,
) -> core::result::Result<(Pubkey, u8), CustodyError> {
    derive(domain, &[instance.as_ref()])
}

// Proof that the program may sign for a custody vault.
//
// Built from the record's stored bump rather than searched again, then checked
// against the signer account the caller supplied before any CPI uses it.
pub struct DerivedAuthority {
    domain: &'static [u8],
    instance: Pubkey,
    bump: [u8; 1],
}

impl DerivedAuthority {
    pub fn new(domain: &'static [u8], instance: Pubkey, bump: u8) -> Self {
        Self {
            domain,
            instance,
            bump: [bump],
        }
    }

    pub fn signer_seeds(&self) -> [&[u8]; 3] {
        [self.domain, self.instance.as_ref(), &self.bump]
    }

    pub fn address(&self) -> core::result::Result<Pubkey, CustodyError> {
        Pubkey::create_program_address(&self.signer_seeds(), &crate::ID)
            .map_err(|_| CustodyError::Unauthorized)
    }

    pub fn verify(&self, signer: &Pubkey) -> core::result::Result<(), CustodyError> {
        if self.address()? != *signer {
            return Err(CustodyError::Unauthorized);
        }
        Ok(())
    }
}
