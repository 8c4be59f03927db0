//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick while idle
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Session
    // ─────────────────────────────────────────────────────────────────────────
    /// Attempt login with the credentials typed into the login screen
    LoginSubmit,
    /// Clear the session and return to the login screen
    Logout,

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Move to next row on the current page
    NextItem,
    /// Move to previous row on the current page
    PrevItem,
    /// Jump to first row on the current page
    FirstItem,
    /// Jump to last row on the current page
    LastItem,
    /// Switch to the next view
    NextView,
    /// Switch to the previous view
    PrevView,

    // ─────────────────────────────────────────────────────────────────────────
    // Pagination
    // ─────────────────────────────────────────────────────────────────────────
    NextPage,
    PrevPage,
    FirstPage,
    LastPage,
    /// Open the page-size picker
    OpenPageSize,
    /// Apply a page size (resets to page 1)
    SetPageSize(usize),

    // ─────────────────────────────────────────────────────────────────────────
    // Search & Sort
    // ─────────────────────────────────────────────────────────────────────────
    EnterSearchMode,
    ExitSearchMode,
    /// Add character to the live search
    SearchInput(char),
    /// Remove last character from the live search
    SearchBackspace,
    /// Sort by the n-th column (repeat toggles direction)
    SortColumn(usize),

    // ─────────────────────────────────────────────────────────────────────────
    // Exact Filters
    // ─────────────────────────────────────────────────────────────────────────
    /// Open the filter picker for the active view
    OpenFilter,
    /// Set an exact-match filter on one field (replaces a filter on the same
    /// field)
    SetFilter { field: String, value: String },
    /// Drop all exact filters
    ClearFilters,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Open the keyboard reference
    OpenHelp,
    /// Open the full-record popup for the selected row
    OpenDetail,
    /// Close the current modal
    CloseModal,
    /// Navigate up in modal
    ModalUp,
    /// Navigate down in modal
    ModalDown,

    // ─────────────────────────────────────────────────────────────────────────
    // Forms
    // ─────────────────────────────────────────────────────────────────────────
    /// Open the add-record form for the active view
    OpenAddForm,
    FormInput(char),
    FormBackspace,
    FormNextField,
    FormPrevField,
    /// Cycle a select field left/right
    FormCycleLeft,
    FormCycleRight,
    /// Validate and submit the open form
    SubmitForm,

    // ─────────────────────────────────────────────────────────────────────────
    // Domain Operations
    // ─────────────────────────────────────────────────────────────────────────
    /// Push the selected customer issue onto the technician task board
    AssignTask,
    /// Re-read the task board from storage
    RefreshTasks,
    /// Open the SMS compose form
    OpenCompose,
    /// Export the current filtered view to CSV
    ExportCsv,
}
