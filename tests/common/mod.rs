//! Mock hub, follow NFT and module globals contracts plus a shared fixture.

#![allow(dead_code)]

use soroban_sdk::{
    contract, contractimpl, contracttype, panic_with_error,
    testutils::{Address as _, Ledger},
    token::{StellarAssetClient, TokenClient},
    xdr::ToXdr,
    Address, Bytes, Env, Error,
};
use soroban_subscription_follow::{
    FollowHubInterface, FollowModuleError, FollowNftInterface, FollowTerms,
    ModuleGlobalsInterface, ProfileData, SubscriptionFollowModule,
    SubscriptionFollowModuleClient,
};

pub const PROFILE_ID: u64 = 1;
pub const UNCONFIGURED_PROFILE_ID: u64 = 2;
pub const THIRTY_DAYS: u64 = 2_592_000;
pub const PRICE: i128 = 50_000_000;
pub const T0: u64 = 1_700_000_000;
pub const STARTING_BALANCE: i128 = 10 * PRICE;

// ========== Mock Hub ==========

#[contracttype]
#[derive(Clone)]
enum HubKey {
    Module,
    FollowNft(u64),
}

#[contract]
pub struct MockHub;

#[contractimpl]
impl MockHub {
    pub fn set_module(env: Env, module: Address) {
        env.storage().instance().set(&HubKey::Module, &module);
    }

    pub fn set_follow_nft(env: Env, profile_id: u64, follow_nft: Address) {
        env.storage()
            .instance()
            .set(&HubKey::FollowNft(profile_id), &follow_nft);
    }

    pub fn set_follow_module(env: Env, profile_id: u64, data: Bytes) -> Bytes {
        Self::module(&env).initialize_follow_module(&profile_id, &data)
    }

    pub fn follow(env: Env, follower: Address, profile_id: u64, data: Bytes) {
        Self::module(&env).process_follow(&follower, &profile_id, &data);
    }

    pub fn transfer_follow_nft(
        env: Env,
        profile_id: u64,
        from: Address,
        to: Address,
        token_id: u64,
    ) {
        let follow_nft: Address = env
            .storage()
            .instance()
            .get(&HubKey::FollowNft(profile_id))
            .unwrap();
        MockFollowNftClient::new(&env, &follow_nft).transfer(&from, &to, &token_id);
        Self::module(&env).follow_module_transfer_hook(&profile_id, &from, &to, &token_id);
    }

    fn module(env: &Env) -> SubscriptionFollowModuleClient<'_> {
        let module: Address = env.storage().instance().get(&HubKey::Module).unwrap();
        SubscriptionFollowModuleClient::new(env, &module)
    }
}

#[contractimpl]
impl FollowHubInterface for MockHub {
    fn get_follow_nft(env: Env, profile_id: u64) -> Option<Address> {
        env.storage().instance().get(&HubKey::FollowNft(profile_id))
    }
}

// ========== Mock Follow NFT ==========

#[contracttype]
#[derive(Clone)]
enum NftKey {
    Balance(Address),
    Owner(u64),
}

#[contract]
pub struct MockFollowNft;

#[contractimpl]
impl MockFollowNft {
    pub fn mint(env: Env, to: Address, token_id: u64) {
        env.storage().persistent().set(&NftKey::Owner(token_id), &to);
        let balance = Self::balance(env.clone(), to.clone());
        env.storage()
            .persistent()
            .set(&NftKey::Balance(to), &(balance + 1));
    }

    pub fn transfer(env: Env, from: Address, to: Address, token_id: u64) {
        let owner = Self::owner_of(env.clone(), token_id);
        assert_eq!(owner, from);

        let from_balance = Self::balance(env.clone(), from.clone());
        let to_balance = Self::balance(env.clone(), to.clone());
        env.storage()
            .persistent()
            .set(&NftKey::Balance(from), &(from_balance - 1));
        env.storage()
            .persistent()
            .set(&NftKey::Balance(to.clone()), &(to_balance + 1));
        env.storage().persistent().set(&NftKey::Owner(token_id), &to);
    }
}

#[contractimpl]
impl FollowNftInterface for MockFollowNft {
    fn balance(env: Env, owner: Address) -> u32 {
        env.storage()
            .persistent()
            .get(&NftKey::Balance(owner))
            .unwrap_or(0)
    }

    fn owner_of(env: Env, token_id: u64) -> Address {
        env.storage()
            .persistent()
            .get(&NftKey::Owner(token_id))
            .unwrap_or_else(|| panic_with_error!(&env, Error::from_contract_error(404)))
    }
}

// ========== Mock Module Globals ==========

#[contracttype]
#[derive(Clone)]
enum GlobalsKey {
    Whitelisted(Address),
}

#[contract]
pub struct MockModuleGlobals;

#[contractimpl]
impl MockModuleGlobals {
    pub fn set_whitelisted(env: Env, currency: Address, whitelisted: bool) {
        env.storage()
            .persistent()
            .set(&GlobalsKey::Whitelisted(currency), &whitelisted);
    }
}

#[contractimpl]
impl ModuleGlobalsInterface for MockModuleGlobals {
    fn is_currency_whitelisted(env: Env, currency: Address) -> bool {
        env.storage()
            .persistent()
            .get(&GlobalsKey::Whitelisted(currency))
            .unwrap_or(false)
    }
}

// ========== Fixture ==========

/// The host error a panicking entry point reports for `e`.
pub fn contract_error(e: FollowModuleError) -> Error {
    e.into()
}

pub struct Fixture {
    pub env: Env,
    pub module: SubscriptionFollowModuleClient<'static>,
    pub hub: MockHubClient<'static>,
    pub follow_nft: MockFollowNftClient<'static>,
    pub globals: MockModuleGlobalsClient<'static>,
    pub token: TokenClient<'static>,
    pub token_admin: StellarAssetClient<'static>,
    pub currency: Address,
    pub recipient: Address,
}

/// Deploy the module next to mock hub contracts and a whitelisted token,
/// with every auth mocked and the clock at `T0`.
pub fn setup() -> Fixture {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(T0);

    let hub_id = env.register(MockHub, ());
    let follow_nft_id = env.register(MockFollowNft, ());
    let globals_id = env.register(MockModuleGlobals, ());
    let module_id = env.register(
        SubscriptionFollowModule,
        (hub_id.clone(), globals_id.clone()),
    );

    let issuer = Address::generate(&env);
    let currency = env.register_stellar_asset_contract_v2(issuer).address();

    let hub = MockHubClient::new(&env, &hub_id);
    hub.set_module(&module_id);
    hub.set_follow_nft(&PROFILE_ID, &follow_nft_id);

    let globals = MockModuleGlobalsClient::new(&env, &globals_id);
    globals.set_whitelisted(&currency, &true);

    Fixture {
        module: SubscriptionFollowModuleClient::new(&env, &module_id),
        hub,
        follow_nft: MockFollowNftClient::new(&env, &follow_nft_id),
        globals,
        token: TokenClient::new(&env, &currency),
        token_admin: StellarAssetClient::new(&env, &currency),
        currency,
        recipient: Address::generate(&env),
        env,
    }
}

impl Fixture {
    pub fn profile_data(&self) -> ProfileData {
        ProfileData {
            recipient: self.recipient.clone(),
            currency: self.currency.clone(),
            amount: PRICE,
            subscription_duration: THIRTY_DAYS,
        }
    }

    pub fn encode_profile_data(&self, data: &ProfileData) -> Bytes {
        data.clone().to_xdr(&self.env)
    }

    pub fn encode_terms(&self, currency: &Address, amount: i128) -> Bytes {
        FollowTerms {
            currency: currency.clone(),
            amount,
        }
        .to_xdr(&self.env)
    }

    /// Attach the module to `PROFILE_ID` through the hub.
    pub fn configure(&self) {
        let data = self.encode_profile_data(&self.profile_data());
        self.hub.set_follow_module(&PROFILE_ID, &data);
    }

    /// A funded account that approved the module to spend its tokens.
    pub fn funded_follower(&self) -> Address {
        let follower = Address::generate(&self.env);
        self.token_admin.mint(&follower, &STARTING_BALANCE);
        self.token.approve(
            &follower,
            &self.module.address,
            &STARTING_BALANCE,
            &(self.env.ledger().sequence() + 10_000),
        );
        follower
    }

    /// A funded follower holding follow NFT `token_id`.
    pub fn nft_holder(&self, token_id: u64) -> Address {
        let follower = self.funded_follower();
        self.follow_nft.mint(&follower, &token_id);
        follower
    }

    /// Pay for a follow at the configured price through the hub.
    pub fn follow(&self, follower: &Address) {
        let terms = self.encode_terms(&self.currency, PRICE);
        self.hub.follow(follower, &PROFILE_ID, &terms);
    }

    pub fn set_time(&self, timestamp: u64) {
        self.env.ledger().set_timestamp(timestamp);
    }
}
