use super::title_buffer_len;

use std::panic::Location;

use error_location::ErrorLocation;
use tracing::{debug, instrument};
use waifu_roller_core::{CoreError, CoreResult, WindowHandle, WindowSystem};
use windows::Win32::{
    Foundation::{BOOL, HWND, LPARAM, TRUE},
    UI::WindowsAndMessaging::{
        EnumWindows, GetForegroundWindow, GetWindowTextLengthW, GetWindowTextW, IsWindow,
        IsWindowVisible, SW_MAXIMIZE, SW_MINIMIZE, SetForegroundWindow, ShowWindow,
    },
};

/// Top-level windows of the interactive desktop.
pub(crate) struct Win32Desktop;

unsafe extern "system" fn enum_windows_cb(hwnd: HWND, lparam: LPARAM) -> BOOL {
    let handles = unsafe { &mut *(lparam.0 as *mut Vec<isize>) };
    handles.push(hwnd.0 as isize);
    TRUE
}

fn hwnd(window: &WindowHandle) -> HWND {
    HWND(window.raw() as *mut _)
}

fn window_title(hwnd: HWND) -> String {
    let reported = unsafe { GetWindowTextLengthW(hwnd) };
    let mut buf = vec![0u16; title_buffer_len(reported)];
    let len = unsafe { GetWindowTextW(hwnd, &mut buf) };
    String::from_utf16_lossy(&buf[..len.max(0) as usize])
}

#[track_caller]
fn ensure_exists(window: &WindowHandle, operation: &'static str) -> CoreResult<HWND> {
    let hwnd = hwnd(window);
    if unsafe { IsWindow(hwnd) }.as_bool() {
        Ok(hwnd)
    } else {
        Err(CoreError::WindowOperationFailed {
            operation,
            reason: format!("window {:?} no longer exists", window.title()),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

impl WindowSystem for Win32Desktop {
    #[instrument(skip(self))]
    fn windows_with_title(&self, marker: &str) -> CoreResult<Vec<WindowHandle>> {
        let mut raw_handles: Vec<isize> = Vec::new();
        unsafe {
            EnumWindows(
                Some(enum_windows_cb),
                LPARAM(&mut raw_handles as *mut Vec<isize> as isize),
            )
        }
        .map_err(|e| CoreError::WindowOperationFailed {
            operation: "enumerate",
            reason: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let matches: Vec<WindowHandle> = raw_handles
            .into_iter()
            .filter(|&raw| unsafe { IsWindowVisible(HWND(raw as *mut _)) }.as_bool())
            .filter_map(|raw| {
                let title = window_title(HWND(raw as *mut _));
                title.contains(marker).then(|| WindowHandle::new(raw, title))
            })
            .collect();

        debug!(count = matches.len(), "Enumerated windows");

        Ok(matches)
    }

    fn active_window(&self) -> Option<WindowHandle> {
        let hwnd = unsafe { GetForegroundWindow() };
        if hwnd.0.is_null() {
            return None;
        }
        Some(WindowHandle::new(hwnd.0 as isize, window_title(hwnd)))
    }

    fn minimize(&self, window: &WindowHandle) -> CoreResult<()> {
        let hwnd = ensure_exists(window, "minimize")?;
        let _ = unsafe { ShowWindow(hwnd, SW_MINIMIZE) };
        Ok(())
    }

    fn maximize(&self, window: &WindowHandle) -> CoreResult<()> {
        let hwnd = ensure_exists(window, "maximize")?;
        let _ = unsafe { ShowWindow(hwnd, SW_MAXIMIZE) };
        Ok(())
    }

    fn activate(&self, window: &WindowHandle) -> CoreResult<()> {
        let hwnd = ensure_exists(window, "activate")?;
        if unsafe { SetForegroundWindow(hwnd) }.as_bool() {
            Ok(())
        } else {
            Err(CoreError::WindowOperationFailed {
                operation: "activate",
                reason: "SetForegroundWindow was refused".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
        }
    }
}
