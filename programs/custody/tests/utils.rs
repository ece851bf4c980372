// Test utilities for the custody program

#![allow(dead_code)]

use anchor_lang::AccountDeserialize;
use litesvm::LiteSVM;
use litesvm_token::{CreateAssociatedTokenAccount, CreateMint, MintTo};
use sha2::{Digest, Sha256};
use solana_sdk::{
    clock::Clock,
    instruction::{AccountMeta, Instruction},
    native_token::LAMPORTS_PER_SOL,
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    transaction::Transaction,
};
use spl_associated_token_account::get_associated_token_address;

// Program ID matching declare_id!
pub const PROGRAM_ID: Pubkey = Pubkey::new_from_array(custody::ID.to_bytes());

// Standard program IDs
pub const TOKEN_PROGRAM_ID: Pubkey = spl_token::ID;
pub const ASSOCIATED_TOKEN_PROGRAM_ID: Pubkey = spl_associated_token_account::ID;
use solana_system_interface::program::ID as system_program;

pub use custody::constants::{
    CAMPAIGN_AUTHORITY_SEED, POOL_AUTHORITY_SEED, SWAP_AUTHORITY_SEED, VAULT_AUTHORITY_SEED,
};
use custody::derivation;

pub const DECIMALS: u8 = 6;
pub const START_TIMESTAMP: i64 = 1_700_000_000;

// ======================== HELPERS ========================

/// Build Anchor instruction discriminator (first 8 bytes of sha256("global:method_name"))
pub fn anchor_discriminator(method: &str) -> [u8; 8] {
    let preimage = format!("global:{}", method);
    let hash = Sha256::digest(preimage.as_bytes());
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash[..8]);
    discriminator
}

/// Load the compiled program into LiteSVM with the clock at a realistic time
pub fn setup_svm() -> LiteSVM {
    let mut svm = LiteSVM::new();
    let program_bytes = std::fs::read(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../../target/deploy/custody.so"
    ))
    .expect("custody.so not found, run `cargo build-sbf` first");
    svm.add_program(PROGRAM_ID, &program_bytes)
        .expect("Failed to load custody program");

    let mut clock: Clock = svm.get_sysvar();
    clock.unix_timestamp = START_TIMESTAMP;
    svm.set_sysvar(&clock);
    svm
}

pub fn create_funded_account(svm: &mut LiteSVM) -> Keypair {
    let keypair = Keypair::new();
    svm.airdrop(&keypair.pubkey(), 10 * LAMPORTS_PER_SOL)
        .expect("Airdrop should succeed");
    keypair
}

pub fn now(svm: &LiteSVM) -> i64 {
    svm.get_sysvar::<Clock>().unix_timestamp
}

/// Advance the SVM clock by the specified number of seconds
pub fn advance_time(svm: &mut LiteSVM, seconds: i64) {
    let mut clock: Clock = svm.get_sysvar();
    clock.unix_timestamp += seconds;
    svm.set_sysvar(&clock);

    let current_slot = clock.slot;
    svm.warp_to_slot(current_slot + (seconds as u64 * 2) + 5);
}

pub fn create_mint(svm: &mut LiteSVM, authority: &Keypair) -> Pubkey {
    CreateMint::new(svm, authority)
        .authority(&authority.pubkey())
        .decimals(DECIMALS)
        .send()
        .expect("Failed to create mint")
}

/// Create `owner`'s ATA for `mint` and fund it with `amount`
pub fn fund_ata(
    svm: &mut LiteSVM,
    mint_authority: &Keypair,
    mint: &Pubkey,
    owner: &Keypair,
    amount: u64,
) -> Pubkey {
    let ata = CreateAssociatedTokenAccount::new(svm, owner, mint)
        .owner(&owner.pubkey())
        .send()
        .expect("Failed to create ATA");

    if amount > 0 {
        MintTo::new(svm, mint_authority, mint, &ata, amount)
            .owner(mint_authority)
            .send()
            .expect("Failed to mint tokens");
    }
    ata
}

/// Create the ATA of an arbitrary `owner`, paid for by `payer`
pub fn create_ata_for(svm: &mut LiteSVM, payer: &Keypair, mint: &Pubkey, owner: &Pubkey) -> Pubkey {
    CreateAssociatedTokenAccount::new(svm, payer, mint)
        .owner(owner)
        .send()
        .expect("Failed to create ATA")
}

pub fn token_balance(svm: &LiteSVM, account: &Pubkey) -> u64 {
    let account: spl_token::state::Account =
        litesvm_token::get_spl_account(svm, account).expect("Token account should exist");
    account.amount
}

pub fn account_closed(svm: &LiteSVM, address: &Pubkey) -> bool {
    match svm.get_account(address) {
        Some(account) => account.lamports == 0 || account.data.is_empty(),
        None => true,
    }
}

/// Decode a program-owned record
pub fn fetch<T: AccountDeserialize>(svm: &LiteSVM, address: &Pubkey) -> T {
    let account = svm.get_account(address).expect("Account should exist");
    T::try_deserialize(&mut account.data.as_slice()).expect("Failed to decode account")
}

pub fn same_key(anchor_key: &anchor_lang::prelude::Pubkey, key: &Pubkey) -> bool {
    anchor_key.to_bytes() == key.to_bytes()
}

// ======================== TRANSACTION HELPERS ========================

pub fn send_tx(
    svm: &mut LiteSVM,
    ix: Instruction,
    payer: &Keypair,
    signers: &[&Keypair],
) -> Result<(), String> {
    // retries of an identical instruction must not look like a duplicate transaction
    svm.expire_blockhash();

    let tx = Transaction::new_signed_with_payer(
        &[ix],
        Some(&payer.pubkey()),
        signers,
        svm.latest_blockhash(),
    );
    svm.send_transaction(tx)
        .map(|_| ())
        .map_err(|err| format!("{:?}", err))
}

/// Send a transaction and expect success
pub fn send_tx_expect_success(svm: &mut LiteSVM, ix: Instruction, payer: &Keypair, signers: &[&Keypair]) {
    if let Err(err) = send_tx(svm, ix, payer, signers) {
        panic!("Transaction should succeed: {}", err);
    }
}

/// Send a transaction and expect failure, returning the formatted error with logs
pub fn send_tx_expect_failure(
    svm: &mut LiteSVM,
    ix: Instruction,
    payer: &Keypair,
    signers: &[&Keypair],
) -> String {
    match send_tx(svm, ix, payer, signers) {
        Ok(()) => panic!("Transaction should have failed"),
        Err(err) => err,
    }
}

// ======================== PDA DERIVATION ========================

// Addresses come from the program's own derivation helpers so seed layouts
// are defined once.

fn program_key(key: &Pubkey) -> anchor_lang::prelude::Pubkey {
    anchor_lang::prelude::Pubkey::new_from_array(key.to_bytes())
}

fn derived(
    result: Result<(anchor_lang::prelude::Pubkey, u8), custody::errors::CustodyError>,
) -> (Pubkey, u8) {
    let (address, bump) = result.expect("Derivation should succeed");
    (Pubkey::new_from_array(address.to_bytes()), bump)
}

pub fn derive_swap_pda(maker: &Pubkey, seed: u64) -> (Pubkey, u8) {
    derived(derivation::swap_address(&program_key(maker), seed))
}

pub fn derive_vault_state_pda(seed: u64, maker: &Pubkey, taker: &Pubkey) -> (Pubkey, u8) {
    derived(derivation::vault_state_address(
        seed,
        &program_key(maker),
        &program_key(taker),
    ))
}

pub fn derive_campaign_pda(maker: &Pubkey, mint: &Pubkey) -> (Pubkey, u8) {
    derived(derivation::campaign_address(&program_key(maker), &program_key(mint)))
}

pub fn derive_pool_pda(seed: u64) -> (Pubkey, u8) {
    derived(derivation::pool_address(seed))
}

pub fn derive_lp_mint_pda(pool: &Pubkey) -> (Pubkey, u8) {
    derived(derivation::lp_mint_address(&program_key(pool)))
}

/// Derived signer for the funds of `instance`
pub fn derive_authority_pda(domain: &[u8], instance: &Pubkey) -> (Pubkey, u8) {
    derived(derivation::authority_address(domain, &program_key(instance)))
}

fn program_accounts() -> [AccountMeta; 3] {
    [
        AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        AccountMeta::new_readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false),
        AccountMeta::new_readonly(system_program, false),
    ]
}

fn instruction(method: &str, args: &[&[u8]], mut accounts: Vec<AccountMeta>) -> Instruction {
    let mut data = anchor_discriminator(method).to_vec();
    for arg in args {
        data.extend_from_slice(arg);
    }
    accounts.extend(program_accounts());

    Instruction {
        program_id: PROGRAM_ID,
        accounts,
        data,
    }
}

// ======================== SWAP BUILDERS ========================

pub fn build_make_swap_ix(
    maker: &Pubkey,
    mint_a: &Pubkey,
    mint_b: &Pubkey,
    seed: u64,
    amount_offered: u64,
    amount_wanted: u64,
) -> Instruction {
    let (swap, _) = derive_swap_pda(maker, seed);
    let (swap_authority, _) = derive_authority_pda(SWAP_AUTHORITY_SEED, &swap);

    instruction(
        "make_swap",
        &[&seed.to_le_bytes(), &amount_offered.to_le_bytes(), &amount_wanted.to_le_bytes()],
        vec![
            AccountMeta::new(*maker, true),
            AccountMeta::new_readonly(*mint_a, false),
            AccountMeta::new_readonly(*mint_b, false),
            AccountMeta::new(get_associated_token_address(maker, mint_a), false),
            AccountMeta::new(swap, false),
            AccountMeta::new_readonly(swap_authority, false),
            AccountMeta::new(get_associated_token_address(&swap_authority, mint_a), false),
        ],
    )
}

/// `signer` is normally the maker; any other key exercises the role check
pub fn build_cancel_swap_ix(signer: &Pubkey, maker: &Pubkey, mint_a: &Pubkey, seed: u64) -> Instruction {
    let (swap, _) = derive_swap_pda(maker, seed);
    let (swap_authority, _) = derive_authority_pda(SWAP_AUTHORITY_SEED, &swap);

    instruction(
        "cancel_swap",
        &[],
        vec![
            AccountMeta::new(*signer, true),
            AccountMeta::new_readonly(*mint_a, false),
            AccountMeta::new(get_associated_token_address(signer, mint_a), false),
            AccountMeta::new(swap, false),
            AccountMeta::new_readonly(swap_authority, false),
            AccountMeta::new(get_associated_token_address(&swap_authority, mint_a), false),
        ],
    )
}

pub fn build_take_swap_ix(
    taker: &Pubkey,
    maker: &Pubkey,
    mint_a: &Pubkey,
    mint_b: &Pubkey,
    seed: u64,
) -> Instruction {
    let (swap, _) = derive_swap_pda(maker, seed);
    let (swap_authority, _) = derive_authority_pda(SWAP_AUTHORITY_SEED, &swap);

    instruction(
        "take_swap",
        &[],
        vec![
            AccountMeta::new(*taker, true),
            AccountMeta::new(*maker, false),
            AccountMeta::new_readonly(*mint_a, false),
            AccountMeta::new_readonly(*mint_b, false),
            AccountMeta::new(get_associated_token_address(taker, mint_a), false),
            AccountMeta::new(get_associated_token_address(taker, mint_b), false),
            AccountMeta::new(get_associated_token_address(maker, mint_b), false),
            AccountMeta::new(swap, false),
            AccountMeta::new_readonly(swap_authority, false),
            AccountMeta::new(get_associated_token_address(&swap_authority, mint_a), false),
        ],
    )
}

// ======================== VAULT BUILDERS ========================

pub fn build_deposit_vault_ix(
    maker: &Pubkey,
    taker: &Pubkey,
    mint: &Pubkey,
    seed: u64,
    amount: u64,
    unlock_at: i64,
) -> Instruction {
    let (vault_state, _) = derive_vault_state_pda(seed, maker, taker);
    let (vault_authority, _) = derive_authority_pda(VAULT_AUTHORITY_SEED, &vault_state);

    instruction(
        "deposit_vault",
        &[&seed.to_le_bytes(), &amount.to_le_bytes(), &unlock_at.to_le_bytes()],
        vec![
            AccountMeta::new(*maker, true),
            AccountMeta::new_readonly(*taker, false),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new(get_associated_token_address(maker, mint), false),
            AccountMeta::new(vault_state, false),
            AccountMeta::new_readonly(vault_authority, false),
            AccountMeta::new(get_associated_token_address(&vault_authority, mint), false),
        ],
    )
}

pub fn build_cancel_vault_ix(
    signer: &Pubkey,
    maker: &Pubkey,
    taker: &Pubkey,
    mint: &Pubkey,
    seed: u64,
) -> Instruction {
    let (vault_state, _) = derive_vault_state_pda(seed, maker, taker);
    let (vault_authority, _) = derive_authority_pda(VAULT_AUTHORITY_SEED, &vault_state);

    instruction(
        "cancel_vault",
        &[],
        vec![
            AccountMeta::new(*signer, true),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new(get_associated_token_address(signer, mint), false),
            AccountMeta::new(vault_state, false),
            AccountMeta::new_readonly(vault_authority, false),
            AccountMeta::new(get_associated_token_address(&vault_authority, mint), false),
        ],
    )
}

pub fn build_claim_vault_ix(
    signer: &Pubkey,
    maker: &Pubkey,
    taker: &Pubkey,
    mint: &Pubkey,
    seed: u64,
) -> Instruction {
    let (vault_state, _) = derive_vault_state_pda(seed, maker, taker);
    let (vault_authority, _) = derive_authority_pda(VAULT_AUTHORITY_SEED, &vault_state);

    instruction(
        "claim_vault",
        &[],
        vec![
            AccountMeta::new(*signer, true),
            AccountMeta::new(*maker, false),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new(get_associated_token_address(signer, mint), false),
            AccountMeta::new(vault_state, false),
            AccountMeta::new_readonly(vault_authority, false),
            AccountMeta::new(get_associated_token_address(&vault_authority, mint), false),
        ],
    )
}

// ======================== CAMPAIGN BUILDERS ========================

pub fn build_make_campaign_ix(maker: &Pubkey, mint: &Pubkey, target_amount: u64) -> Instruction {
    let (campaign, _) = derive_campaign_pda(maker, mint);
    let (campaign_authority, _) = derive_authority_pda(CAMPAIGN_AUTHORITY_SEED, &campaign);

    instruction(
        "make_campaign",
        &[&target_amount.to_le_bytes()],
        vec![
            AccountMeta::new(*maker, true),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new(campaign, false),
            AccountMeta::new_readonly(campaign_authority, false),
            AccountMeta::new(get_associated_token_address(&campaign_authority, mint), false),
        ],
    )
}

pub fn build_donate_ix(donor: &Pubkey, maker: &Pubkey, mint: &Pubkey, amount: u64) -> Instruction {
    let (campaign, _) = derive_campaign_pda(maker, mint);
    let (campaign_authority, _) = derive_authority_pda(CAMPAIGN_AUTHORITY_SEED, &campaign);

    instruction(
        "donate",
        &[&amount.to_le_bytes()],
        vec![
            AccountMeta::new(*donor, true),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new(get_associated_token_address(donor, mint), false),
            AccountMeta::new(campaign, false),
            AccountMeta::new_readonly(campaign_authority, false),
            AccountMeta::new(get_associated_token_address(&campaign_authority, mint), false),
        ],
    )
}

pub fn build_withdraw_campaign_ix(signer: &Pubkey, maker: &Pubkey, mint: &Pubkey) -> Instruction {
    let (campaign, _) = derive_campaign_pda(maker, mint);
    let (campaign_authority, _) = derive_authority_pda(CAMPAIGN_AUTHORITY_SEED, &campaign);

    instruction(
        "withdraw_campaign",
        &[],
        vec![
            AccountMeta::new(*signer, true),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new(get_associated_token_address(signer, mint), false),
            AccountMeta::new(campaign, false),
            AccountMeta::new_readonly(campaign_authority, false),
            AccountMeta::new(get_associated_token_address(&campaign_authority, mint), false),
        ],
    )
}

// ======================== POOL BUILDERS ========================

pub struct PoolKeys {
    pub pool: Pubkey,
    pub pool_authority: Pubkey,
    pub lp_mint: Pubkey,
    pub mint_x: Pubkey,
    pub mint_y: Pubkey,
    pub vault_x: Pubkey,
    pub vault_y: Pubkey,
}

impl PoolKeys {
    pub fn new(seed: u64, mint_x: &Pubkey, mint_y: &Pubkey) -> Self {
        let (pool, _) = derive_pool_pda(seed);
        let (pool_authority, _) = derive_authority_pda(POOL_AUTHORITY_SEED, &pool);
        let (lp_mint, _) = derive_lp_mint_pda(&pool);
        Self {
            pool,
            pool_authority,
            lp_mint,
            mint_x: *mint_x,
            mint_y: *mint_y,
            vault_x: get_associated_token_address(&pool_authority, mint_x),
            vault_y: get_associated_token_address(&pool_authority, mint_y),
        }
    }

    fn head(&self, user: &Pubkey) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(*user, true),
            AccountMeta::new(self.pool, false),
            AccountMeta::new_readonly(self.pool_authority, false),
            AccountMeta::new_readonly(self.mint_x, false),
            AccountMeta::new_readonly(self.mint_y, false),
        ]
    }
}

pub fn build_initialize_pool_ix(
    initializer: &Pubkey,
    keys: &PoolKeys,
    seed: u64,
    fee_bps: u16,
    authority: Option<&Pubkey>,
) -> Instruction {
    let mut authority_arg = Vec::with_capacity(33);
    match authority {
        Some(key) => {
            authority_arg.push(1);
            authority_arg.extend_from_slice(key.as_ref());
        }
        None => authority_arg.push(0),
    }

    instruction(
        "initialize_pool",
        &[&seed.to_le_bytes(), &fee_bps.to_le_bytes(), &authority_arg],
        vec![
            AccountMeta::new(*initializer, true),
            AccountMeta::new_readonly(keys.mint_x, false),
            AccountMeta::new_readonly(keys.mint_y, false),
            AccountMeta::new(keys.pool, false),
            AccountMeta::new_readonly(keys.pool_authority, false),
            AccountMeta::new(keys.lp_mint, false),
            AccountMeta::new(keys.vault_x, false),
            AccountMeta::new(keys.vault_y, false),
        ],
    )
}

pub fn build_deposit_liquidity_ix(
    depositor: &Pubkey,
    keys: &PoolKeys,
    amount_x: u64,
    amount_y: u64,
    expiration: i64,
) -> Instruction {
    let mut accounts = keys.head(depositor);
    accounts.extend([
        AccountMeta::new(keys.lp_mint, false),
        AccountMeta::new(get_associated_token_address(depositor, &keys.mint_x), false),
        AccountMeta::new(get_associated_token_address(depositor, &keys.mint_y), false),
        AccountMeta::new(get_associated_token_address(depositor, &keys.lp_mint), false),
        AccountMeta::new(keys.vault_x, false),
        AccountMeta::new(keys.vault_y, false),
    ]);

    instruction(
        "deposit_liquidity",
        &[&amount_x.to_le_bytes(), &amount_y.to_le_bytes(), &expiration.to_le_bytes()],
        accounts,
    )
}

pub fn build_withdraw_liquidity_ix(
    withdrawer: &Pubkey,
    keys: &PoolKeys,
    lp_amount: u64,
    min_amount_x: u64,
    min_amount_y: u64,
    expiration: i64,
) -> Instruction {
    let mut accounts = keys.head(withdrawer);
    accounts.extend([
        AccountMeta::new(keys.lp_mint, false),
        AccountMeta::new(get_associated_token_address(withdrawer, &keys.mint_x), false),
        AccountMeta::new(get_associated_token_address(withdrawer, &keys.mint_y), false),
        AccountMeta::new(get_associated_token_address(withdrawer, &keys.lp_mint), false),
        AccountMeta::new(keys.vault_x, false),
        AccountMeta::new(keys.vault_y, false),
    ]);

    instruction(
        "withdraw_liquidity",
        &[
            &lp_amount.to_le_bytes(),
            &min_amount_x.to_le_bytes(),
            &min_amount_y.to_le_bytes(),
            &expiration.to_le_bytes(),
        ],
        accounts,
    )
}

pub fn build_swap_tokens_ix(
    swapper: &Pubkey,
    keys: &PoolKeys,
    mint_in: &Pubkey,
    amount_in: u64,
    min_amount_out: u64,
    expiration: i64,
) -> Instruction {
    let mut accounts = keys.head(swapper);
    accounts.extend([
        AccountMeta::new(get_associated_token_address(swapper, &keys.mint_x), false),
        AccountMeta::new(get_associated_token_address(swapper, &keys.mint_y), false),
        AccountMeta::new(keys.vault_x, false),
        AccountMeta::new(keys.vault_y, false),
    ]);

    instruction(
        "swap_tokens",
        &[
            mint_in.as_ref(),
            &amount_in.to_le_bytes(),
            &min_amount_out.to_le_bytes(),
            &expiration.to_le_bytes(),
        ],
        accounts,
    )
}

fn build_pool_control_ix(method: &str, authority: &Pubkey, pool: &Pubkey) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*authority, true),
            AccountMeta::new(*pool, false),
        ],
        data: anchor_discriminator(method).to_vec(),
    }
}

pub fn build_lock_pool_ix(authority: &Pubkey, pool: &Pubkey) -> Instruction {
    build_pool_control_ix("lock_pool", authority, pool)
}

pub fn build_unlock_pool_ix(authority: &Pubkey, pool: &Pubkey) -> Instruction {
    build_pool_control_ix("unlock_pool", authority, pool)
}
