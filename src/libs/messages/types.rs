#[derive(Debug, Clone)]
pub enum Message {
    // === USER DIRECTORY MESSAGES ===
    UserAdded(String),
    NoUsersFound,
    ClockedInCount(usize),

    // === SCAN MESSAGES ===
    ClockedIn(String),
    ClockedOut(String),
    ClockedOutWithDuration(String, String), // name, formatted duration

    // === MANUAL ENTRY MESSAGES ===
    ManualEntryRecorded(String, String, String), // name, time in, time out

    // === CHECKOUT MESSAGES ===
    NoUsersClockedIn,
    AllUsersClockedOut(usize),
    ConfirmCheckoutAll,

    // === LOG REVIEW MESSAGES ===
    LogEmpty,
    EntryDeleted(u64),
    EntryModified(u64),
    ConfirmDeleteEntry(u64),
    NothingToModify,

    // === REPORT MESSAGES ===
    ReportHeader(String, String), // start date, end date
    NoEventsInRange,

    // === EXPORT MESSAGES ===
    ExportCompleted(String), // file path

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    PromptDataDir,

    // === GENERIC MESSAGES ===
    OperationCancelled,
}
