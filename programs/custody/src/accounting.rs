// Accounting Engine
//
// Every token movement in or out of custody goes through these helpers.
// Inbound legs are signed by the participant; outbound legs are signed by a
// derived authority whose proof is checked against the signer account first.

use anchor_lang::prelude::*;
use anchor_spl::token::{
    burn, close_account, mint_to, transfer, Burn, CloseAccount, MintTo, Transfer,
};

use crate::{constants::*, derivation::DerivedAuthority, errors::CustodyError};

// GUARDS

// Vault must still hold everything the record says it holds.
// Extra tokens sent to a vault by anyone are tolerated and never counted.
pub fn assert_tracked_balance(actual: u64, tracked: u64) -> core::result::Result<(), CustodyError> {
    if actual < tracked {
        return Err(CustodyError::BalanceMismatch);
    }
    Ok(())
}

pub fn assert_sufficient(balance: u64, amount: u64) -> core::result::Result<(), CustodyError> {
    if balance < amount {
        return Err(CustodyError::InsufficientFunds);
    }
    Ok(())
}

// Deadline for pool operations: strictly in the future, at most a year out
pub fn validate_expiration(expiration: i64, now: i64) -> core::result::Result<(), CustodyError> {
    if expiration <= now {
        return Err(CustodyError::TransactionExpired);
    }

    let time_until_expiration = expiration
        .checked_sub(now)
        .ok_or(CustodyError::Overflow)?;

    if time_until_expiration > MAX_EXPIRATION_SECONDS {
        return Err(CustodyError::ExpirationTooFar);
    }
    Ok(())
}

// CPI HELPERS

// Participant-signed transfer, into custody or straight to a counterparty
pub fn deposit<'info>(
    amount: u64,
    token_program: &AccountInfo<'info>,
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    owner: &AccountInfo<'info>,
) -> Result<()> {
    require!(amount > 0, CustodyError::ZeroAmount);

    transfer(
        CpiContext::new(
            token_program.clone(),
            Transfer {
                from: from.clone(),
                to: to.clone(),
                authority: owner.clone(),
            },
        ),
        amount,
    )
}

// Transfer out of a custody vault, signed by the derived authority
pub fn withdraw<'info>(
    amount: u64,
    token_program: &AccountInfo<'info>,
    vault: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    authority: &AccountInfo<'info>,
    proof: &DerivedAuthority,
) -> Result<()> {
    require!(amount > 0, CustodyError::ZeroAmount);
    proof.verify(authority.key)?;

    let authority_seeds = proof.signer_seeds();
    let signer_seeds = &[&authority_seeds[..]];

    transfer(
        CpiContext::new_with_signer(
            token_program.clone(),
            Transfer {
                from: vault.clone(),
                to: to.clone(),
                authority: authority.clone(),
            },
            signer_seeds,
        ),
        amount,
    )
}

// Mint pool shares; the mint authority is the pool's derived signer
pub fn mint_derivative<'info>(
    amount: u64,
    token_program: &AccountInfo<'info>,
    mint: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    authority: &AccountInfo<'info>,
    proof: &DerivedAuthority,
) -> Result<()> {
    require!(amount > 0, CustodyError::ZeroAmount);
    proof.verify(authority.key)?;

    let authority_seeds = proof.signer_seeds();
    let signer_seeds = &[&authority_seeds[..]];

    mint_to(
        CpiContext::new_with_signer(
            token_program.clone(),
            MintTo {
                mint: mint.clone(),
                to: to.clone(),
                authority: authority.clone(),
            },
            signer_seeds,
        ),
        amount,
    )
}

// Holder burns their own shares
pub fn burn_derivative<'info>(
    amount: u64,
    token_program: &AccountInfo<'info>,
    mint: &AccountInfo<'info>,
    from: &AccountInfo<'info>,
    owner: &AccountInfo<'info>,
) -> Result<()> {
    require!(amount > 0, CustodyError::ZeroAmount);

    burn(
        CpiContext::new(
            token_program.clone(),
            Burn {
                mint: mint.clone(),
                from: from.clone(),
                authority: owner.clone(),
            },
        ),
        amount,
    )
}

// Close an emptied custody vault, rent goes to `destination`
pub fn close_vault<'info>(
    token_program: &AccountInfo<'info>,
    vault: &AccountInfo<'info>,
    destination: &AccountInfo<'info>,
    authority: &AccountInfo<'info>,
    proof: &DerivedAuthority,
) -> Result<()> {
    proof.verify(authority.key)?;

    let authority_seeds = proof.signer_seeds();
    let signer_seeds = &[&authority_seeds[..]];

    close_account(CpiContext::new_with_signer(
        token_program.clone(),
        CloseAccount {
            account: vault.clone(),
            destination: destination.clone(),
            authority: authority.clone(),
        },
        signer_seeds,
    ))
}

// Pay out the whole vault balance (if any) and close the vault
pub fn drain_and_close<'info>(
    token_program: &AccountInfo<'info>,
    vault: &AccountInfo<'info>,
    vault_balance: u64,
    to: &AccountInfo<'info>,
    rent_destination: &AccountInfo<'info>,
    authority: &AccountInfo<'info>,
    proof: &DerivedAuthority,
) -> Result<()> {
    if vault_balance > 0 {
        withdraw(vault_balance, token_program, vault, to, authority, proof)?;
    }
    close_vault(token_program, vault, rent_destination, authority, proof)
}
