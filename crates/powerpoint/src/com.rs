//! PowerPoint driven through COM late binding (`IDispatch`).

use crate::automation::{Application, Document, Launcher};
use pptshot_core::{AppInfo, Error, OpenFlags, Result, TriState};
use std::path::Path;
use std::ptr;
use windows::core::{w, Interface, IUnknown, BSTR, GUID, HSTRING, PCWSTR, VARIANT};
use windows::Win32::System::Com::{
    CLSIDFromProgID, CoCreateInstance, CoInitializeEx, CoUninitialize, IDispatch,
    CLSCTX_LOCAL_SERVER, COINIT_APARTMENTTHREADED, DISPATCH_FLAGS, DISPATCH_METHOD,
    DISPATCH_PROPERTYGET, DISPATCH_PROPERTYPUT, DISPPARAMS,
};
use windows::Win32::Foundation::{E_POINTER, TYPE_E_TYPEMISMATCH};
use windows::Win32::System::Ole::DISPID_PROPERTYPUT;
use windows::Win32::System::Variant::{VT_DISPATCH, VT_UNKNOWN};

const LOCALE_USER_DEFAULT: u32 = 0x0400;

/// COM initialized on the current thread for as long as this value lives.
struct Apartment;

impl Apartment {
    fn enter() -> Result<Self> {
        unsafe { CoInitializeEx(None, COINIT_APARTMENTTHREADED) }
            .ok()
            .map_err(|e| Error::Unavailable(e.message().to_string()))?;
        Ok(Self)
    }
}

impl Drop for Apartment {
    fn drop(&mut self) {
        unsafe { CoUninitialize() };
    }
}

/// Thin late-binding wrapper around an `IDispatch` pointer.
struct Dispatch(IDispatch);

impl Dispatch {
    /// Take the object held by a `VT_DISPATCH` or `VT_UNKNOWN` variant.
    ///
    /// PowerPoint returns objects as `VT_DISPATCH`, which the conversions on
    /// `VARIANT` itself do not accept.
    fn from_variant(value: &VARIANT) -> windows::core::Result<Self> {
        let null = || windows::core::Error::from(E_POINTER);
        unsafe {
            let raw = &value.as_raw().Anonymous.Anonymous;
            if raw.vt == VT_DISPATCH.0 {
                let ptr = raw.Anonymous.pdispVal;
                let dispatch = IDispatch::from_raw_borrowed(&ptr).ok_or_else(null)?;
                Ok(Self(dispatch.clone()))
            } else if raw.vt == VT_UNKNOWN.0 {
                let ptr = raw.Anonymous.punkVal;
                let unknown = IUnknown::from_raw_borrowed(&ptr).ok_or_else(null)?;
                Ok(Self(unknown.cast::<IDispatch>()?))
            } else {
                Err(TYPE_E_TYPEMISMATCH.into())
            }
        }
    }

    fn dispid(&self, name: &str) -> windows::core::Result<i32> {
        let wide = HSTRING::from(name);
        let names = [PCWSTR(wide.as_ptr())];
        let mut id = 0;
        unsafe {
            self.0
                .GetIDsOfNames(&GUID::zeroed(), names.as_ptr(), 1, LOCALE_USER_DEFAULT, &mut id)?;
        }
        Ok(id)
    }

    fn invoke(
        &self,
        name: &str,
        flags: DISPATCH_FLAGS,
        mut args: Vec<VARIANT>,
    ) -> windows::core::Result<VARIANT> {
        let id = self.dispid(name)?;

        // IDispatch takes positional arguments last to first.
        args.reverse();
        let is_put = flags == DISPATCH_PROPERTYPUT;
        let mut named = DISPID_PROPERTYPUT;
        let params = DISPPARAMS {
            rgvarg: if args.is_empty() {
                ptr::null_mut()
            } else {
                args.as_mut_ptr()
            },
            rgdispidNamedArgs: if is_put { &mut named } else { ptr::null_mut() },
            cArgs: args.len() as u32,
            cNamedArgs: u32::from(is_put),
        };

        let mut result = VARIANT::default();
        unsafe {
            self.0.Invoke(
                id,
                &GUID::zeroed(),
                LOCALE_USER_DEFAULT,
                flags,
                &params,
                Some(&mut result),
                None,
                None,
            )?;
        }
        Ok(result)
    }

    fn get(&self, name: &'static str) -> Result<VARIANT> {
        self.invoke(name, DISPATCH_PROPERTYGET, Vec::new())
            .map_err(|e| property_error(name, e))
    }

    fn get_object(&self, name: &'static str) -> Result<Dispatch> {
        let value = self.get(name)?;
        Dispatch::from_variant(&value).map_err(|e| property_error(name, e))
    }

    fn get_string(&self, name: &'static str) -> Result<String> {
        let value = self.get(name)?;
        BSTR::try_from(&value)
            .map(|s| s.to_string())
            .map_err(|e| property_error(name, e))
    }

    fn get_f64(&self, name: &'static str) -> Result<f64> {
        let value = self.get(name)?;
        f64::try_from(&value).map_err(|e| property_error(name, e))
    }

    fn get_i32(&self, name: &'static str) -> Result<i32> {
        let value = self.get(name)?;
        i32::try_from(&value).map_err(|e| property_error(name, e))
    }

    fn put(&self, name: &'static str, value: VARIANT) -> Result<()> {
        self.invoke(name, DISPATCH_PROPERTYPUT, vec![value])
            .map(|_| ())
            .map_err(|e| property_error(name, e))
    }

    fn call(&self, name: &'static str, args: Vec<VARIANT>) -> Result<VARIANT> {
        self.invoke(name, DISPATCH_METHOD, args)
            .map_err(|e| Error::Call {
                name,
                reason: e.message().to_string(),
            })
    }
}

fn property_error(name: &'static str, e: windows::core::Error) -> Error {
    Error::Property {
        name,
        reason: e.message().to_string(),
    }
}

fn path_arg(path: &Path) -> VARIANT {
    VARIANT::from(BSTR::from(path.to_string_lossy().as_ref()))
}

fn int_arg(value: u32) -> VARIANT {
    VARIANT::from(i32::try_from(value).unwrap_or(i32::MAX))
}

/// Launches `PowerPoint.Application` out of process.
#[derive(Debug, Clone, Copy, Default)]
pub struct PowerPoint;

impl Launcher for PowerPoint {
    type App = ComApplication;

    fn launch(&self) -> Result<ComApplication> {
        let apartment = Apartment::enter()?;
        let unavailable = |e: windows::core::Error| Error::Unavailable(e.message().to_string());

        let clsid = unsafe { CLSIDFromProgID(w!("PowerPoint.Application")) }.map_err(unavailable)?;
        let app: IDispatch =
            unsafe { CoCreateInstance(&clsid, None, CLSCTX_LOCAL_SERVER) }.map_err(unavailable)?;

        Ok(ComApplication {
            app: Dispatch(app),
            _apartment: apartment,
        })
    }
}

/// A running PowerPoint instance.
// Field order matters: the interface is released before COM is torn down.
pub struct ComApplication {
    app: Dispatch,
    _apartment: Apartment,
}

impl Application for ComApplication {
    type Doc = ComDocument;

    fn info(&self) -> Result<AppInfo> {
        Ok(AppInfo {
            version: self.app.get_string("Version")?,
            build: self.app.get_string("Build")?,
            operating_system: self.app.get_string("OperatingSystem")?,
        })
    }

    fn open(&self, path: &Path, flags: OpenFlags) -> Result<ComDocument> {
        let presentations = self.app.get_object("Presentations")?;
        let open_error = |reason: String| Error::Open {
            path: path.to_path_buf(),
            reason,
        };

        let value = presentations
            .call(
                "Open",
                vec![
                    path_arg(path),
                    VARIANT::from(flags.read_only.as_i32()),
                    VARIANT::from(flags.untitled.as_i32()),
                    VARIANT::from(flags.with_window.as_i32()),
                ],
            )
            .map_err(|e| open_error(e.to_string()))?;
        let presentation =
            Dispatch::from_variant(&value).map_err(|e| open_error(e.message().to_string()))?;

        Ok(ComDocument { presentation })
    }

    fn quit(&mut self) -> Result<()> {
        self.app.call("Quit", Vec::new()).map(|_| ())
    }
}

/// An open presentation inside a [`ComApplication`].
pub struct ComDocument {
    presentation: Dispatch,
}

impl Document for ComDocument {
    fn slide_master_size(&self) -> Result<(f64, f64)> {
        let master = self.presentation.get_object("SlideMaster")?;
        Ok((master.get_f64("Width")?, master.get_f64("Height")?))
    }

    fn slide_count(&self) -> Result<u32> {
        let slides = self.presentation.get_object("Slides")?;
        let count = slides.get_i32("Count")?;
        Ok(u32::try_from(count).unwrap_or(0))
    }

    fn export_slide(
        &self,
        index: u32,
        path: &Path,
        filter: &str,
        width: u32,
        height: u32,
    ) -> Result<()> {
        let slides = self.presentation.get_object("Slides")?;
        let item = slides.call("Item", vec![int_arg(index)])?;
        let slide = Dispatch::from_variant(&item).map_err(|e| Error::Call {
            name: "Item",
            reason: e.message().to_string(),
        })?;

        slide
            .call(
                "Export",
                vec![
                    path_arg(path),
                    VARIANT::from(BSTR::from(filter)),
                    int_arg(width),
                    int_arg(height),
                ],
            )
            .map(|_| ())
            .map_err(|e| Error::Export {
                index,
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
    }

    fn mark_unmodified(&mut self) -> Result<()> {
        self.presentation
            .put("Saved", VARIANT::from(TriState::True.as_i32()))
    }

    fn close(&mut self) -> Result<()> {
        self.presentation.call("Close", Vec::new()).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// `Scripting.FileSystemObject` ships with every Windows install and,
    /// like PowerPoint, returns child objects as `VT_DISPATCH`.
    fn file_system() -> (Apartment, Dispatch) {
        let apartment = Apartment::enter().unwrap();
        let clsid = unsafe { CLSIDFromProgID(w!("Scripting.FileSystemObject")) }.unwrap();
        let fso: IDispatch =
            unsafe { CoCreateInstance(&clsid, None, windows::Win32::System::Com::CLSCTX_INPROC_SERVER) }
                .unwrap();
        (apartment, Dispatch(fso))
    }

    #[test]
    fn test_from_variant_accepts_dispatch_objects() {
        let (_apartment, fso) = file_system();
        let dir = std::env::temp_dir();

        let folder = fso.call("GetFolder", vec![path_arg(&dir)]).unwrap();
        let folder = Dispatch::from_variant(&folder).unwrap();

        assert!(!folder.get_string("Path").unwrap().is_empty());
    }

    #[test]
    fn test_from_variant_accepts_unknown_objects() {
        let (_apartment, fso) = file_system();
        let unknown: IUnknown = fso.0.cast().unwrap();

        let value = VARIANT::from(unknown);
        let dispatch = Dispatch::from_variant(&value).unwrap();

        assert!(dispatch.dispid("GetFolder").is_ok());
    }

    #[test]
    fn test_from_variant_rejects_scalars() {
        let _apartment = Apartment::enter().unwrap();

        let err = Dispatch::from_variant(&VARIANT::from(3i32)).unwrap_err();
        assert_eq!(err.code(), TYPE_E_TYPEMISMATCH);

        let err = Dispatch::from_variant(&VARIANT::default()).unwrap_err();
        assert_eq!(err.code(), TYPE_E_TYPEMISMATCH);
    }
}
