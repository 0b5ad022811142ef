#![allow(dead_code)]

use std::path::PathBuf;

use anchor_lang::{
    solana_program::{
        instruction::{AccountMeta, Instruction, InstructionError},
        pubkey::Pubkey,
    },
    system_program, AccountDeserialize, InstructionData, ToAccountMetas,
};
use litesvm::{types::TransactionResult, LiteSVM};
use solana_sdk::{
    signature::Keypair,
    signer::Signer,
    transaction::{Transaction, TransactionError},
};
use solidr::{
    error::SolidrError,
    settlement::{self, SessionBalance},
    state::{ExpenseAccount, GlobalAccount, MemberAccount, RefundAccount, SessionAccount},
};

pub const AIRDROP_LAMPORTS: u64 = 10_000_000_000;

pub struct TestContext {
    pub svm: LiteSVM,
}

/// Looks for the program built by `anchor build`
fn program_path() -> Option<PathBuf> {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let mut candidates = vec![manifest_dir.join("../../target/deploy/solidr.so")];
    if let Ok(out_dir) = std::env::var("SBF_OUT_DIR") {
        candidates.insert(0, PathBuf::from(out_dir).join("solidr.so"));
    }
    candidates.into_iter().find(|path| path.exists())
}

/// Loads the program and creates the global counter.
///
/// Returns `None` when the program binary is missing, so a plain
/// `cargo test` still runs the unit tests.
pub fn setup_test() -> Option<TestContext> {
    let Some(path) = program_path() else {
        eprintln!("solidr.so not found, run `anchor build` to enable instruction tests");
        return None;
    };

    let mut svm = LiteSVM::new();
    svm.add_program_from_file(solidr::ID, &path)
        .expect("Failed to load program");

    let mut context = TestContext { svm };
    let payer = context.user();
    let accounts = solidr::accounts::Initialize {
        signer: payer.pubkey(),
        global: GlobalAccount::find_address().0,
        system_program: system_program::ID,
    };
    let result = context.send(
        build_ix(accounts, solidr::instruction::Initialize, &[]),
        &[&payer],
    );
    assert_success(result);

    Some(context)
}

fn build_ix(
    accounts: impl ToAccountMetas,
    args: impl InstructionData,
    remaining: &[Pubkey],
) -> Instruction {
    let mut metas = accounts.to_account_metas(None);
    metas.extend(remaining.iter().map(|key| AccountMeta::new(*key, false)));
    Instruction {
        program_id: solidr::ID,
        accounts: metas,
        data: args.data(),
    }
}

pub fn assert_success(result: TransactionResult) {
    if let Err(failed) = result {
        panic!(
            "Transaction failed with {:?}:\n{}",
            failed.err,
            failed.meta.pretty_logs()
        );
    }
}

pub fn assert_solidr_error(result: TransactionResult, error: SolidrError) {
    let message = error.to_string();
    let expected =
        TransactionError::InstructionError(0, InstructionError::Custom(u32::from(error)));
    match result {
        Ok(_) => panic!("Expected \"{}\", transaction succeeded", message),
        Err(failed) => assert_eq!(
            failed.err,
            expected,
            "Expected \"{}\":\n{}",
            message,
            failed.meta.pretty_logs()
        ),
    }
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {}, got {}",
        expected,
        actual
    );
}

pub fn member_address(session_id: u64, addr: &Pubkey) -> Pubkey {
    MemberAccount::find_address(session_id, addr).0
}

impl TestContext {
    pub fn send(&mut self, ix: Instruction, signers: &[&Keypair]) -> TransactionResult {
        let tx = Transaction::new_signed_with_payer(
            &[ix],
            Some(&signers[0].pubkey()),
            signers,
            self.svm.latest_blockhash(),
        );
        let result = self.svm.send_transaction(tx);
        // identical retries must not be rejected as already processed
        self.svm.expire_blockhash();
        result
    }

    /// A funded keypair
    pub fn user(&mut self) -> Keypair {
        let user = Keypair::new();
        self.svm
            .airdrop(&user.pubkey(), AIRDROP_LAMPORTS)
            .expect("Failed to airdrop");
        user
    }

    pub fn lamports(&self, key: &Pubkey) -> u64 {
        self.svm.get_balance(key).unwrap_or(0)
    }

    /// `None` for missing, closed or foreign accounts
    pub fn fetch<T: AccountDeserialize>(&self, key: &Pubkey) -> Option<T> {
        let account = self.svm.get_account(key)?;
        T::try_deserialize(&mut account.data.as_slice()).ok()
    }

    pub fn global(&self) -> GlobalAccount {
        self.fetch(&GlobalAccount::find_address().0)
            .expect("global account")
    }

    pub fn session(&self, session_id: u64) -> Option<SessionAccount> {
        self.fetch(&SessionAccount::find_address(session_id).0)
    }

    pub fn member(&self, session_id: u64, addr: &Pubkey) -> Option<MemberAccount> {
        self.fetch(&member_address(session_id, addr))
    }

    pub fn expense(&self, session_id: u64, expense_id: u16) -> Option<ExpenseAccount> {
        self.fetch(&ExpenseAccount::find_address(session_id, expense_id).0)
    }

    pub fn refund(&self, session_id: u64, refund_id: u16) -> Option<RefundAccount> {
        self.fetch(&RefundAccount::find_address(session_id, refund_id).0)
    }

    pub fn participations(&self, session_id: u64, addr: &Pubkey) -> u16 {
        self.member(session_id, addr)
            .expect("member account")
            .participations
    }

    /// Balances computed from the records currently stored for the session
    pub fn session_balance(
        &self,
        session_id: u64,
        members: &[Pubkey],
        me: Option<&Pubkey>,
    ) -> SessionBalance {
        let session = self.session(session_id).expect("session account");
        let members: Vec<MemberAccount> = members
            .iter()
            .filter_map(|addr| self.member(session_id, addr))
            .collect();
        let expenses: Vec<ExpenseAccount> = (0..session.expenses_count)
            .filter_map(|expense_id| self.expense(session_id, expense_id))
            .collect();
        let refunds: Vec<RefundAccount> = (0..session.refunds_count)
            .filter_map(|refund_id| self.refund(session_id, refund_id))
            .collect();
        settlement::compute_balance(&members, &expenses, &refunds, me).expect("balances")
    }

    // sessions

    pub fn open_session(
        &mut self,
        admin: &Keypair,
        name: &str,
        description: &str,
        member_name: &str,
    ) -> TransactionResult {
        let session_id = self.global().session_count;
        let accounts = solidr::accounts::OpenSession {
            admin: admin.pubkey(),
            global: GlobalAccount::find_address().0,
            session: SessionAccount::find_address(session_id).0,
            member: member_address(session_id, &admin.pubkey()),
            system_program: system_program::ID,
        };
        let args = solidr::instruction::OpenSession {
            name: name.to_string(),
            description: description.to_string(),
            member_name: member_name.to_string(),
        };
        self.send(build_ix(accounts, args, &[]), &[admin])
    }

    /// Opens a session and returns its id
    pub fn open(&mut self, admin: &Keypair, member_name: &str) -> u64 {
        let session_id = self.global().session_count;
        let result = self.open_session(admin, "Trip", "desc", member_name);
        assert_success(result);
        session_id
    }

    pub fn update_session(
        &mut self,
        admin: &Keypair,
        session_id: u64,
        name: &str,
        description: &str,
    ) -> TransactionResult {
        let accounts = solidr::accounts::UpdateSession {
            admin: admin.pubkey(),
            session: SessionAccount::find_address(session_id).0,
        };
        let args = solidr::instruction::UpdateSession {
            name: name.to_string(),
            description: description.to_string(),
        };
        self.send(build_ix(accounts, args, &[]), &[admin])
    }

    pub fn close_session(&mut self, admin: &Keypair, session_id: u64) -> TransactionResult {
        let accounts = solidr::accounts::CloseSession {
            admin: admin.pubkey(),
            session: SessionAccount::find_address(session_id).0,
        };
        self.send(
            build_ix(accounts, solidr::instruction::CloseSession, &[]),
            &[admin],
        )
    }

    pub fn delete_session(
        &mut self,
        admin: &Keypair,
        session_id: u64,
        records: &[Pubkey],
    ) -> TransactionResult {
        let accounts = solidr::accounts::DeleteSession {
            admin: admin.pubkey(),
            session: SessionAccount::find_address(session_id).0,
        };
        self.send(
            build_ix(accounts, solidr::instruction::DeleteSession, records),
            &[admin],
        )
    }

    pub fn set_token_hash(
        &mut self,
        admin: &Keypair,
        session_id: u64,
        hash: [u8; 32],
    ) -> TransactionResult {
        let accounts = solidr::accounts::SetSessionTokenHash {
            admin: admin.pubkey(),
            session: SessionAccount::find_address(session_id).0,
        };
        self.send(
            build_ix(accounts, solidr::instruction::SetSessionTokenHash { hash }, &[]),
            &[admin],
        )
    }

    // members

    pub fn add_member(
        &mut self,
        admin: &Keypair,
        session_id: u64,
        addr: Pubkey,
        name: &str,
    ) -> TransactionResult {
        let accounts = solidr::accounts::AddSessionMember {
            admin: admin.pubkey(),
            session: SessionAccount::find_address(session_id).0,
            member: member_address(session_id, &addr),
            system_program: system_program::ID,
        };
        let args = solidr::instruction::AddSessionMember {
            addr,
            name: name.to_string(),
        };
        self.send(build_ix(accounts, args, &[]), &[admin])
    }

    pub fn join(
        &mut self,
        signer: &Keypair,
        session_id: u64,
        name: &str,
        token: &str,
    ) -> TransactionResult {
        let accounts = solidr::accounts::JoinSessionAsMember {
            signer: signer.pubkey(),
            session: SessionAccount::find_address(session_id).0,
            member: member_address(session_id, &signer.pubkey()),
            system_program: system_program::ID,
        };
        let args = solidr::instruction::JoinSessionAsMember {
            name: name.to_string(),
            token: token.to_string(),
        };
        self.send(build_ix(accounts, args, &[]), &[signer])
    }

    pub fn update_member(
        &mut self,
        signer: &Keypair,
        session_id: u64,
        addr: Pubkey,
        name: &str,
    ) -> TransactionResult {
        let accounts = solidr::accounts::UpdateSessionMember {
            signer: signer.pubkey(),
            session: SessionAccount::find_address(session_id).0,
            member: member_address(session_id, &addr),
        };
        let args = solidr::instruction::UpdateSessionMember {
            addr,
            name: name.to_string(),
        };
        self.send(build_ix(accounts, args, &[]), &[signer])
    }

    pub fn delete_member(
        &mut self,
        admin: &Keypair,
        session_id: u64,
        addr: Pubkey,
    ) -> TransactionResult {
        let accounts = solidr::accounts::DeleteSessionMember {
            admin: admin.pubkey(),
            session: SessionAccount::find_address(session_id).0,
            member: member_address(session_id, &addr),
        };
        self.send(
            build_ix(accounts, solidr::instruction::DeleteSessionMember { addr }, &[]),
            &[admin],
        )
    }

    // expenses

    /// Member records of `participants` are passed in argument order
    pub fn add_expense(
        &mut self,
        owner: &Keypair,
        session_id: u64,
        name: &str,
        amount: f32,
        participants: &[Pubkey],
    ) -> TransactionResult {
        let session = self.session(session_id).expect("session account");
        let accounts = solidr::accounts::AddExpense {
            owner: owner.pubkey(),
            session: SessionAccount::find_address(session_id).0,
            member: member_address(session_id, &owner.pubkey()),
            expense: ExpenseAccount::find_address(session_id, session.expenses_count).0,
            system_program: system_program::ID,
        };
        let records: Vec<Pubkey> = participants
            .iter()
            .map(|addr| member_address(session_id, addr))
            .collect();
        let args = solidr::instruction::AddExpense {
            name: name.to_string(),
            amount,
            participants: participants.to_vec(),
        };
        self.send(build_ix(accounts, args, &records), &[owner])
    }

    pub fn update_expense(
        &mut self,
        owner: &Keypair,
        session_id: u64,
        expense_id: u16,
        name: &str,
        amount: f32,
    ) -> TransactionResult {
        let accounts = solidr::accounts::UpdateExpense {
            owner: owner.pubkey(),
            session: SessionAccount::find_address(session_id).0,
            expense: ExpenseAccount::find_address(session_id, expense_id).0,
        };
        let args = solidr::instruction::UpdateExpense {
            name: name.to_string(),
            amount,
        };
        self.send(build_ix(accounts, args, &[]), &[owner])
    }

    pub fn add_participants(
        &mut self,
        owner: &Keypair,
        session_id: u64,
        expense_id: u16,
        participants: &[Pubkey],
    ) -> TransactionResult {
        let accounts = solidr::accounts::AddExpenseParticipants {
            owner: owner.pubkey(),
            session: SessionAccount::find_address(session_id).0,
            expense: ExpenseAccount::find_address(session_id, expense_id).0,
        };
        let records: Vec<Pubkey> = participants
            .iter()
            .map(|addr| member_address(session_id, addr))
            .collect();
        let args = solidr::instruction::AddExpenseParticipants {
            participants: participants.to_vec(),
        };
        self.send(build_ix(accounts, args, &records), &[owner])
    }

    pub fn remove_participants(
        &mut self,
        owner: &Keypair,
        session_id: u64,
        expense_id: u16,
        participants: &[Pubkey],
    ) -> TransactionResult {
        let accounts = solidr::accounts::RemoveExpenseParticipants {
            owner: owner.pubkey(),
            session: SessionAccount::find_address(session_id).0,
            expense: ExpenseAccount::find_address(session_id, expense_id).0,
        };
        let records: Vec<Pubkey> = participants
            .iter()
            .map(|addr| member_address(session_id, addr))
            .collect();
        let args = solidr::instruction::RemoveExpenseParticipants {
            participants: participants.to_vec(),
        };
        self.send(build_ix(accounts, args, &records), &[owner])
    }

    /// Passes the member records of every participant but the owner
    pub fn delete_expense(
        &mut self,
        owner: &Keypair,
        session_id: u64,
        expense_id: u16,
    ) -> TransactionResult {
        let expense = self
            .expense(session_id, expense_id)
            .expect("expense account");
        let records: Vec<Pubkey> = expense
            .participants
            .iter()
            .filter(|participant| **participant != expense.owner)
            .map(|addr| member_address(session_id, addr))
            .collect();
        let accounts = solidr::accounts::DeleteExpense {
            owner: owner.pubkey(),
            session: SessionAccount::find_address(session_id).0,
            member: member_address(session_id, &owner.pubkey()),
            expense: ExpenseAccount::find_address(session_id, expense_id).0,
        };
        self.send(
            build_ix(accounts, solidr::instruction::DeleteExpense, &records),
            &[owner],
        )
    }

    // refunds

    pub fn add_refund(
        &mut self,
        from: &Keypair,
        to: &Pubkey,
        session_id: u64,
        amount: f32,
        amount_in_lamports: u64,
    ) -> TransactionResult {
        let session = self.session(session_id).expect("session account");
        let accounts = solidr::accounts::AddRefund {
            from: from.pubkey(),
            to: *to,
            session: SessionAccount::find_address(session_id).0,
            from_member: member_address(session_id, &from.pubkey()),
            to_member: member_address(session_id, to),
            refund: RefundAccount::find_address(session_id, session.refunds_count).0,
            system_program: system_program::ID,
        };
        let args = solidr::instruction::AddRefund {
            amount,
            amount_in_lamports,
        };
        self.send(build_ix(accounts, args, &[]), &[from])
    }

    pub fn delete_refund(
        &mut self,
        admin: &Keypair,
        session_id: u64,
        refund_id: u16,
    ) -> TransactionResult {
        let accounts = solidr::accounts::DeleteRefund {
            admin: admin.pubkey(),
            session: SessionAccount::find_address(session_id).0,
            refund: RefundAccount::find_address(session_id, refund_id).0,
        };
        self.send(
            build_ix(accounts, solidr::instruction::DeleteRefund, &[]),
            &[admin],
        )
    }
}
