/*
 * Copyright (c):
 * 2025 Gustavo Mondragón
 * gustavms93@gmail.com
 *
 * This file is part of nu-sui.
 *
 * nu-sui is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * nu-sui is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with nu-sui. If not, see <https://www.gnu.org/licenses/>.
 */

#[cfg(windows)]
extern crate winres;

#[cfg(windows)]
fn main() {
    if Ok("release".to_owned()) == std::env::var("PROFILE") {
        let mut res = winres::WindowsResource::new();
        res.set_manifest(manifest_data());
        res.set("FileDescription", "Ñu-sui: learn how to use your bike gears");
        res.set("ProductName", "Ñu-sui");
        if let Err(e) = res.compile() {
            println!("cargo:warning=Failed to embed windows resources. {}", e);
        }
    }
}

#[cfg(windows)]
fn manifest_data() -> &'static str {
    return r#"
<assembly xmlns="urn:schemas-microsoft-com:asm.v1" manifestVersion="1.0">
<trustInfo xmlns="urn:schemas-microsoft-com:asm.v3">
    <security>
        <requestedPrivileges>
            <requestedExecutionLevel level="asInvoker" uiAccess="false" />
        </requestedPrivileges>
    </security>
</trustInfo>
</assembly>
"#;
}

#[cfg(unix)]
fn main() {
}
