//! The parts provided by the Python standard library.
//!
//! Every module of the standard library is described together with the
//! versions and targets it applies to. Core modules are always included in
//! an application: core extension modules are compiled into the interpreter
//! library and listed in its `config.c`.

use crate::core::part::Part;
use crate::sysroot::component::Provides;

pub fn standard_library() -> Provides {
    let modules: Vec<(&str, Vec<Part>)> = vec![
        ("__future__", vec![Part::python_module()]),
        (
            "_abc",
            vec![
                Part::extension_module()
                    .min_version((3, 7))
                    .max_version((3, 7, 2))
                    .internal()
                    .source(&["!win#_abc.c"]),
                Part::extension_module().min_version((3, 7, 3)).internal().source(&["_abc.c"]),
            ],
        ),
        ("_ast", vec![Part::core_extension_module().internal()]),
        (
            "_asyncio",
            vec![
                Part::extension_module()
                    .min_version((3, 6))
                    .internal()
                    .source(&["_asynciomodule.c"]),
            ],
        ),
        ("_bisect", vec![Part::extension_module().internal().source(&["_bisectmodule.c"])]),
        (
            "_blake2",
            vec![
                Part::extension_module()
                    .min_version((3, 6))
                    .internal()
                    .includepath(&["_blake2"])
                    .source(&[
                        "_blake2/blake2module.c",
                        "_blake2/blake2b_impl.c",
                        "_blake2/blake2s_impl.c",
                    ]),
            ],
        ),
        ("_bootlocale", vec![Part::python_module().internal().deps(&["_locale"])]),
        (
            "_bz2",
            vec![
                Part::extension_module()
                    .internal()
                    .deps(&["bzip2:bzip2"])
                    .source(&["_bz2module.c"])
                    .pyd("_bz2.pyd"),
            ],
        ),
        ("_codecs", vec![Part::core_extension_module().internal()]),
        (
            "_codecs_cn",
            vec![
                Part::extension_module().internal().source(&["cjkcodecs/_codecs_cn.c"]),
            ],
        ),
        (
            "_codecs_hk",
            vec![
                Part::extension_module().internal().source(&["cjkcodecs/_codecs_hk.c"]),
            ],
        ),
        (
            "_codecs_iso2022",
            vec![
                Part::extension_module().internal().source(&["cjkcodecs/_codecs_iso2022.c"]),
            ],
        ),
        (
            "_codecs_jp",
            vec![
                Part::extension_module().internal().source(&["cjkcodecs/_codecs_jp.c"]),
            ],
        ),
        (
            "_codecs_kr",
            vec![
                Part::extension_module().internal().source(&["cjkcodecs/_codecs_kr.c"]),
            ],
        ),
        (
            "_codecs_tw",
            vec![
                Part::extension_module().internal().source(&["cjkcodecs/_codecs_tw.c"]),
            ],
        ),
        ("_collections", vec![Part::core_extension_module().internal()]),
        ("_collections_abc", vec![Part::python_module().internal().deps(&["abc"])]),
        ("_compat_pickle", vec![Part::python_module().internal()]),
        ("_compression", vec![Part::python_module().internal().deps(&["io"])]),
        (
            "_contextvars",
            vec![
                Part::extension_module()
                    .min_version((3, 7))
                    .internal()
                    .source(&["_contextvarsmodule.c"]),
            ],
        ),
        (
            "_crypt",
            vec![
                Part::extension_module().target("!win").internal().source(&["_cryptmodule.c"]),
            ],
        ),
        ("_csv", vec![Part::extension_module().internal().source(&["_csv.c"])]),
        (
            "_ctypes",
            vec![
                Part::extension_module()
                    .target("linux|macos|win")
                    .internal()
                    .defines(&["macos#MACOSX"])
                    .libs(&["linux#-lffi"])
                    .includepath(&[
                        "_ctypes",
                        "macos#_ctypes/darwin",
                        "macos#_ctypes/libffi_osx/include",
                        "win#_ctypes/libffi_msvc",
                    ])
                    .source(&[
                        "_ctypes/_ctypes.c",
                        "_ctypes/callbacks.c",
                        "_ctypes/callproc.c",
                        "_ctypes/stgdict.c",
                        "_ctypes/cfield.c",
                        "macos#_ctypes/malloc_closure.c",
                        "macos#_ctypes/darwin/dlfcn_simple.c",
                        "macos#_ctypes/libffi_osx/ffi.c",
                        "macos#_ctypes/libffi_osx/x86/darwin64.S",
                        "macos#_ctypes/libffi_osx/x86/x86-darwin.S",
                        "macos#_ctypes/libffi_osx/x86/x86-ffi_darwin.c",
                        "macos#_ctypes/libffi_osx/x86/x86-ffi64.c",
                        "win#_ctypes/malloc_closure.c",
                        "win#_ctypes/libffi_msvc/prep_cif.c",
                        "win#_ctypes/libffi_msvc/ffi.c",
                        "win-32#_ctypes/libffi_msvc/win32.c",
                        "win-64#_ctypes/libffi_msvc/win64.asm",
                    ])
                    .pyd("_ctypes.pyd"),
            ],
        ),
        (
            "_curses",
            vec![
                Part::extension_module()
                    .target("!win")
                    .internal()
                    .deps(&["curses:curses"])
                    .source(&["_cursesmodule.c"]),
            ],
        ),
        (
            "_curses_panel",
            vec![
                Part::extension_module()
                    .target("!win")
                    .internal()
                    .deps(&["curses:panel"])
                    .source(&["_curses_panel.c"]),
            ],
        ),
        (
            "_datetime",
            vec![
                Part::extension_module()
                    .max_version((3, 5, 1))
                    .internal()
                    .source(&["_datetimemodule.c"]),
                Part::extension_module()
                    .min_version((3, 5, 2))
                    .internal()
                    .libs(&["linux#-lm"])
                    .source(&["_datetimemodule.c"]),
            ],
        ),
        (
            "_dbm",
            vec![
                Part::extension_module()
                    .internal()
                    .deps(&["ndbm:ndbm"])
                    .defines(&["HAVE_NDBM_H"])
                    .source(&["_dbmmodule.c"]),
            ],
        ),
        (
            "_distutils_findvs",
            vec![
                Part::extension_module()
                    .min_version((3, 6, 5))
                    .max_version((3, 7, 1))
                    .target("win")
                    .internal()
                    .source(&["../PC/_findvs.cpp"])
                    .pyd("_distutils_findvs.pyd"),
            ],
        ),
        (
            "_elementtree",
            vec![
                Part::extension_module()
                    .internal()
                    .deps(&["copy", "pyexpat", "xml.etree.ElementPath"])
                    .defines(&[
                        "win#COMPILED_FROM_DSP",
                        "!win#HAVE_EXPAT_CONFIG_H",
                        "USE_PYEXPAT_CAPI",
                        "XML_POOR_ENTROPY",
                    ])
                    .source(&["_elementtree.c"])
                    .pyd("_elementtree.pyd"),
            ],
        ),
        (
            "_findvs",
            vec![
                Part::extension_module()
                    .min_version((3, 6, 3))
                    .max_version((3, 6, 4))
                    .target("win")
                    .internal()
                    .source(&["../PC/_findvs.cpp"])
                    .pyd("_findvs.pyd"),
            ],
        ),
        ("_functools", vec![Part::core_extension_module().internal()]),
        (
            "_gdbm",
            vec![
                Part::extension_module().internal().deps(&["gdbm:gdbm"]).source(&["_gdbmmodule.c"]),
            ],
        ),
        (
            "_hashlib",
            vec![
                Part::extension_module()
                    .internal()
                    .deps(&["OpenSSL:openssl"])
                    .source(&["_hashopenssl.c"])
                    .pyd("_hashlib.pyd"),
            ],
        ),
        ("_heapq", vec![Part::extension_module().internal().source(&["_heapqmodule.c"])]),
        ("_imp", vec![Part::core_extension_module().internal()]),
        ("_io", vec![Part::core_extension_module().internal().deps(&["_bootlocale"])]),
        ("_json", vec![Part::extension_module().internal().source(&["_json.c"])]),
        ("_locale", vec![Part::core_extension_module().internal()]),
        (
            "_lsprof",
            vec![
                Part::extension_module().internal().source(&["_lsprof.c", "rotatingtree.c"]),
            ],
        ),
        (
            "_lzma",
            vec![
                Part::extension_module()
                    .internal()
                    .deps(&["LZMA:lzma"])
                    .source(&["_lzmamodule.c"])
                    .pyd("_lzma.pyd"),
            ],
        ),
        ("_markupbase", vec![Part::python_module().internal().deps(&["re"])]),
        ("_md5", vec![Part::extension_module().internal().source(&["md5module.c"])]),
        (
            "_msi",
            vec![
                Part::extension_module()
                    .target("win")
                    .internal()
                    .libs(&["-lfci", "-lmsi", "-lrpcrt4"])
                    .source(&["../PC/_msi.c"])
                    .pyd("_msi.pyd"),
            ],
        ),
        (
            "_multibytecodec",
            vec![
                Part::extension_module().internal().source(&["cjkcodecs/multibytecodec.c"]),
            ],
        ),
        (
            "_multiprocessing",
            vec![
                Part::extension_module()
                    .internal()
                    .includepath(&["_multiprocessing"])
                    .source(&["_multiprocessing/multiprocessing.c", "_multiprocessing/semaphore.c"])
                    .pyd("_multiprocessing.pyd"),
            ],
        ),
        ("_opcode", vec![Part::extension_module().internal().source(&["_opcode.c"])]),
        ("_operator", vec![Part::core_extension_module().internal()]),
        (
            "_osx_support",
            vec![
                Part::python_module()
                    .target("ios|macos")
                    .internal()
                    .deps(&["contextlib", "os", "re"]),
            ],
        ),
        (
            "_overlapped",
            vec![
                Part::extension_module().target("win").internal().source(&["overlapped.c"]),
            ],
        ),
        ("_pickle", vec![Part::extension_module().internal().source(&["_pickle.c"])]),
        (
            "_posixsubprocess",
            vec![
                Part::extension_module().target("!win").internal().source(&["_posixsubprocess.c"]),
            ],
        ),
        (
            "_pydecimal",
            vec![
                Part::python_module()
                    .max_version((3, 6))
                    .internal()
                    .deps(&[
                        "collections",
                        "itertools",
                        "locale",
                        "math",
                        "numbers",
                        "re",
                        "threading",
                    ]),
                Part::python_module()
                    .min_version((3, 7))
                    .internal()
                    .deps(&[
                        "collections",
                        "contextvars",
                        "itertools",
                        "locale",
                        "math",
                        "numbers",
                        "re",
                    ]),
            ],
        ),
        (
            "_queue",
            vec![
                Part::extension_module().min_version((3, 7)).internal().source(&["_queuemodule.c"]),
            ],
        ),
        ("_random", vec![Part::extension_module().internal().source(&["_randommodule.c"])]),
        (
            "_scproxy",
            vec![
                Part::extension_module().target("macos").internal().source(&["_scproxy.c"]),
            ],
        ),
        ("_sha1", vec![Part::extension_module().internal().source(&["sha1module.c"])]),
        ("_sha256", vec![Part::extension_module().internal().source(&["sha256module.c"])]),
        (
            "_sha3",
            vec![
                Part::extension_module()
                    .min_version((3, 6))
                    .internal()
                    .includepath(&["_sha3"])
                    .source(&["_sha3/sha3module.c"]),
            ],
        ),
        ("_sha512", vec![Part::extension_module().internal().source(&["sha512module.c"])]),
        ("_signal", vec![Part::core_extension_module().internal()]),
        (
            "_socket",
            vec![
                Part::extension_module().internal().source(&["socketmodule.c"]).pyd("_socket.pyd"),
            ],
        ),
        (
            "_sqlite3",
            vec![
                Part::extension_module()
                    .internal()
                    .deps(&["SQLite:sqlite3"])
                    .defines(&["MODULE_NAME=\\\\\\\"sqlite3\\\\\\\"", "SQLITE_OMIT_LOAD_EXTENSION"])
                    .includepath(&["_sqlite"])
                    .source(&[
                        "_sqlite/cache.c",
                        "_sqlite/connection.c",
                        "_sqlite/cursor.c",
                        "_sqlite/microprotocols.c",
                        "_sqlite/module.c",
                        "_sqlite/prepare_protocol.c",
                        "_sqlite/row.c",
                        "_sqlite/statement.c",
                        "_sqlite/util.c",
                    ])
                    .pyd("_sqlite3.pyd")
                    .dlls(&["sqlite3.dll"]),
            ],
        ),
        ("_sre", vec![Part::core_extension_module().internal()]),
        (
            "_ssl",
            vec![
                Part::extension_module()
                    .max_version((3, 6))
                    .internal()
                    .deps(&["OpenSSL:openssl"])
                    .source(&["_ssl.c"])
                    .pyd("_ssl.pyd"),
                Part::extension_module()
                    .min_version((3, 7))
                    .internal()
                    .deps(&["OpenSSL:openssl"])
                    .source(&["_ssl.c"])
                    .pyd("_ssl.pyd")
                    .dlls(&["libcrypto-1_1.dll", "libssl-1_1.dll"]),
            ],
        ),
        ("_stat", vec![Part::core_extension_module().internal()]),
        ("_string", vec![Part::core_extension_module().internal()]),
        (
            "_strptime",
            vec![
                Part::python_module()
                    .internal()
                    .deps(&["calendar", "datetime", "locale", "re", "_thread", "time"]),
            ],
        ),
        (
            "_struct",
            vec![
                Part::extension_module().max_version((3, 6)).internal().source(&["!win#_struct.c"]),
                Part::extension_module().min_version((3, 7)).internal().source(&["_struct.c"]),
            ],
        ),
        ("_symtable", vec![Part::core_extension_module().internal()]),
        ("_sysconfigdata", vec![Part::python_module().version((3, 5)).target("!win").internal()]),
        (
            "_sysconfigdata_m_darwin_darwin",
            vec![
                Part::python_module().min_version((3, 6)).target("macos").internal(),
            ],
        ),
        (
            "_sysconfigdata_m_darwin_ios",
            vec![
                Part::python_module().min_version((3, 6)).target("ios").internal(),
            ],
        ),
        (
            "_sysconfigdata_m_linux_android",
            vec![
                Part::python_module().min_version((3, 6)).target("android").internal(),
            ],
        ),
        (
            "_sysconfigdata_m_linux_x86_64-linux-gnu",
            vec![
                Part::python_module().min_version((3, 6)).target("linux").internal(),
            ],
        ),
        ("_thread", vec![Part::core_extension_module()]),
        ("_tracemalloc", vec![Part::core_extension_module().internal()]),
        (
            "_uuid",
            vec![
                Part::extension_module()
                    .min_version((3, 7))
                    .target("ios|macos")
                    .internal()
                    .source(&["_uuidmodule.c"]),
            ],
        ),
        ("_warnings", vec![Part::core_extension_module().internal()]),
        ("_weakref", vec![Part::core_extension_module().internal()]),
        ("_weakrefset", vec![Part::python_module().internal().deps(&["_weakref"])]),
        ("_winapi", vec![Part::extension_module().target("win").internal().source(&["_winapi.c"])]),
        (
            "abc",
            vec![
                Part::python_module().max_version((3, 6)).deps(&["_weakrefset"]),
                Part::python_module().min_version((3, 7)).deps(&["_abc"]),
            ],
        ),
        (
            "aifc",
            vec![
                Part::python_module()
                    .deps(&["audioop", "chunk", "collections", "math", "struct", "warnings"]),
            ],
        ),
        (
            "argparse",
            vec![
                Part::python_module()
                    .max_version((3, 6))
                    .deps(&["collections", "copy", "gettext", "os", "re", "textwrap"]),
                Part::python_module()
                    .min_version((3, 7))
                    .deps(&["copy", "gettext", "os", "re", "textwrap", "warnings"]),
            ],
        ),
        ("array", vec![Part::extension_module().source(&["arraymodule.c"])]),
        ("ast", vec![Part::python_module().deps(&["_ast", "collections", "inspect"])]),
        (
            "asynchat",
            vec![
                Part::python_module()
                    .version((3, 5))
                    .deps(&["asyncore", "collections", "warnings"]),
                Part::python_module().min_version((3, 6)).deps(&["asyncore", "collections"]),
            ],
        ),
        (
            "asyncio",
            vec![
                Part::python_module()
                    .max_version((3, 6))
                    .deps(&[
                        "asyncio.base_events",
                        "asyncio.coroutines",
                        "asyncio.events",
                        "asyncio.futures",
                        "asyncio.locks",
                        "asyncio.protocols",
                        "asyncio.queues",
                        "asyncio.streams",
                        "asyncio.subprocess",
                        "asyncio.tasks",
                        "asyncio.transports",
                        "!win#asyncio.unix_events",
                        "win#asyncio.windows_events",
                        "selectors",
                    ]),
                Part::python_module()
                    .min_version((3, 7))
                    .deps(&[
                        "asyncio.base_events",
                        "asyncio.coroutines",
                        "asyncio.events",
                        "asyncio.futures",
                        "asyncio.locks",
                        "asyncio.protocols",
                        "asyncio.runners",
                        "asyncio.queues",
                        "asyncio.streams",
                        "asyncio.subprocess",
                        "asyncio.tasks",
                        "asyncio.transports",
                        "!win#asyncio.unix_events",
                        "win#asyncio.windows_events",
                    ]),
            ],
        ),
        (
            "asyncio.base_events",
            vec![
                Part::python_module()
                    .version((3, 5, 0))
                    .internal()
                    .deps(&[
                        "asyncio",
                        "asyncio.compat",
                        "asyncio.coroutines",
                        "asyncio.events",
                        "asyncio.futures",
                        "asyncio.log",
                        "asyncio.tasks",
                        "collections",
                        "concurrent.futures",
                        "heapq",
                        "inspect",
                        "logging",
                        "os",
                        "socket",
                        "subprocess",
                        "threading",
                        "time",
                        "traceback",
                        "warnings",
                    ]),
                Part::python_module()
                    .min_version((3, 5, 1))
                    .max_version((3, 5, 2))
                    .internal()
                    .deps(&[
                        "asyncio",
                        "asyncio.compat",
                        "asyncio.coroutines",
                        "asyncio.events",
                        "asyncio.futures",
                        "asyncio.log",
                        "asyncio.tasks",
                        "collections",
                        "concurrent.futures",
                        "heapq",
                        "inspect",
                        "itertools",
                        "logging",
                        "os",
                        "socket",
                        "subprocess",
                        "threading",
                        "time",
                        "traceback",
                        "warnings",
                    ]),
                Part::python_module()
                    .min_version((3, 5, 3))
                    .max_version((3, 6))
                    .internal()
                    .deps(&[
                        "asyncio",
                        "asyncio.compat",
                        "asyncio.coroutines",
                        "asyncio.events",
                        "asyncio.futures",
                        "asyncio.log",
                        "asyncio.tasks",
                        "collections",
                        "concurrent.futures",
                        "heapq",
                        "inspect",
                        "itertools",
                        "logging",
                        "os",
                        "socket",
                        "subprocess",
                        "threading",
                        "time",
                        "traceback",
                        "warnings",
                        "weakref",
                    ]),
                Part::python_module()
                    .min_version((3, 7))
                    .internal()
                    .deps(&[
                        "asyncio",
                        "asyncio.constants",
                        "asyncio.coroutines",
                        "asyncio.events",
                        "asyncio.futures",
                        "asyncio.log",
                        "asyncio.protocols",
                        "asyncio.sslproto",
                        "asyncio.tasks",
                        "asyncio.transports",
                        "collections",
                        "collections.abc",
                        "concurrent.futures",
                        "heapq",
                        "itertools",
                        "logging",
                        "os",
                        "socket",
                        "?ssl",
                        "subprocess",
                        "threading",
                        "time",
                        "traceback",
                        "warnings",
                        "weakref",
                    ]),
            ],
        ),
        (
            "asyncio.base_futures",
            vec![
                Part::python_module()
                    .version((3, 6))
                    .internal()
                    .deps(&["asyncio", "asyncio.events", "concurrent.futures", "reprlib"]),
                Part::python_module()
                    .min_version((3, 7))
                    .internal()
                    .deps(&["asyncio", "asyncio.format_helpers", "concurrent.futures", "reprlib"]),
            ],
        ),
        (
            "asyncio.base_subprocess",
            vec![
                Part::python_module()
                    .max_version((3, 5, 2))
                    .internal()
                    .deps(&[
                        "asyncio",
                        "asyncio.compat",
                        "asyncio.coroutines",
                        "asyncio.futures",
                        "asyncio.log",
                        "asyncio.protocols",
                        "asyncio.transports",
                        "collections",
                        "subprocess",
                        "warnings",
                    ]),
                Part::python_module()
                    .min_version((3, 5, 3))
                    .max_version((3, 6))
                    .internal()
                    .deps(&[
                        "asyncio",
                        "asyncio.compat",
                        "asyncio.coroutines",
                        "asyncio.log",
                        "asyncio.protocols",
                        "asyncio.transports",
                        "collections",
                        "subprocess",
                        "warnings",
                    ]),
                Part::python_module()
                    .min_version((3, 7))
                    .internal()
                    .deps(&[
                        "asyncio",
                        "asyncio.log",
                        "asyncio.protocols",
                        "asyncio.transports",
                        "collections",
                        "subprocess",
                        "warnings",
                    ]),
            ],
        ),
        (
            "asyncio.base_tasks",
            vec![
                Part::python_module()
                    .min_version((3, 6))
                    .internal()
                    .deps(&[
                        "asyncio",
                        "asyncio.base_futures",
                        "asyncio.coroutines",
                        "linecache",
                        "traceback",
                    ]),
            ],
        ),
        (
            "asyncio.compat",
            vec![
                Part::python_module().max_version((3, 6)).internal().deps(&["asyncio"]),
            ],
        ),
        (
            "asyncio.constants",
            vec![
                Part::python_module().max_version((3, 6)).internal().deps(&["asyncio"]),
                Part::python_module().min_version((3, 7)).internal().deps(&["asyncio", "enum"]),
            ],
        ),
        (
            "asyncio.coroutines",
            vec![
                Part::python_module()
                    .version((3, 5))
                    .internal()
                    .deps(&[
                        "asyncio",
                        "asyncio.compat",
                        "asyncio.events",
                        "asyncio.futures",
                        "asyncio.log",
                        "collections.abc",
                        "functools",
                        "inspect",
                        "opcode",
                        "os",
                        "traceback",
                        "types",
                    ]),
                Part::python_module()
                    .min_version((3, 6))
                    .max_version((3, 6, 3))
                    .internal()
                    .deps(&[
                        "asyncio",
                        "asyncio.base_futures",
                        "asyncio.compat",
                        "asyncio.events",
                        "asyncio.log",
                        "collections.abc",
                        "functools",
                        "inspect",
                        "opcode",
                        "os",
                        "traceback",
                        "types",
                    ]),
                Part::python_module()
                    .min_version((3, 6, 4))
                    .max_version((3, 6))
                    .internal()
                    .deps(&[
                        "asyncio",
                        "asyncio.base_futures",
                        "asyncio.compat",
                        "asyncio.constants",
                        "asyncio.events",
                        "asyncio.log",
                        "collections.abc",
                        "functools",
                        "inspect",
                        "opcode",
                        "os",
                        "traceback",
                        "types",
                    ]),
                Part::python_module()
                    .min_version((3, 7))
                    .internal()
                    .deps(&[
                        "asyncio",
                        "asyncio.base_futures",
                        "asyncio.constants",
                        "asyncio.format_helpers",
                        "asyncio.log",
                        "collections.abc",
                        "functools",
                        "inspect",
                        "os",
                        "traceback",
                        "types",
                    ]),
            ],
        ),
        (
            "asyncio.events",
            vec![
                Part::python_module()
                    .max_version((3, 5, 3))
                    .internal()
                    .deps(&[
                        "asyncio",
                        "asyncio.compat",
                        "functools",
                        "inspect",
                        "reprlib",
                        "socket",
                        "subprocess",
                        "threading",
                        "traceback",
                    ]),
                Part::python_module()
                    .min_version((3, 5, 4))
                    .max_version((3, 5))
                    .internal()
                    .deps(&[
                        "asyncio",
                        "asyncio.compat",
                        "functools",
                        "inspect",
                        "os",
                        "reprlib",
                        "socket",
                        "subprocess",
                        "threading",
                        "traceback",
                    ]),
                Part::python_module()
                    .version((3, 6, 0))
                    .internal()
                    .deps(&[
                        "asyncio",
                        "asyncio.compat",
                        "functools",
                        "inspect",
                        "reprlib",
                        "socket",
                        "subprocess",
                        "threading",
                        "traceback",
                    ]),
                Part::python_module()
                    .min_version((3, 6, 1))
                    .max_version((3, 6, 3))
                    .internal()
                    .deps(&[
                        "asyncio",
                        "asyncio.compat",
                        "functools",
                        "inspect",
                        "os",
                        "reprlib",
                        "socket",
                        "subprocess",
                        "threading",
                        "traceback",
                    ]),
                Part::python_module()
                    .min_version((3, 6, 4))
                    .max_version((3, 6))
                    .internal()
                    .deps(&[
                        "asyncio",
                        "asyncio.compat",
                        "asyncio.constants",
                        "functools",
                        "inspect",
                        "os",
                        "reprlib",
                        "socket",
                        "subprocess",
                        "threading",
                        "traceback",
                    ]),
                Part::python_module()
                    .min_version((3, 7))
                    .internal()
                    .deps(&[
                        "asyncio",
                        "asyncio.format_helpers",
                        "contextvars",
                        "os",
                        "socket",
                        "subprocess",
                        "threading",
                    ]),
            ],
        ),
        (
            "asyncio.format_helpers",
            vec![
                Part::python_module()
                    .min_version((3, 7))
                    .internal()
                    .deps(&[
                        "asyncio",
                        "asyncio.constants",
                        "functools",
                        "inspect",
                        "reprlib",
                        "traceback",
                    ]),
            ],
        ),
        (
            "asyncio.futures",
            vec![
                Part::python_module()
                    .version((3, 5))
                    .internal()
                    .deps(&[
                        "asyncio",
                        "asyncio.compat",
                        "asyncio.events",
                        "concurrent.futures._base",
                        "logging",
                        "reprlib",
                        "traceback",
                    ]),
                Part::python_module()
                    .version((3, 6))
                    .internal()
                    .deps(&[
                        "asyncio",
                        "asyncio.base_futures",
                        "asyncio.compat",
                        "asyncio.events",
                        "_asyncio",
                        "concurrent.futures",
                        "logging",
                        "traceback",
                    ]),
                Part::python_module()
                    .min_version((3, 7))
                    .internal()
                    .deps(&[
                        "asyncio",
                        "asyncio.base_futures",
                        "asyncio.events",
                        "asyncio.format_helpers",
                        "_asyncio",
                        "concurrent.futures",
                        "contextvars",
                        "logging",
                    ]),
            ],
        ),
        (
            "asyncio.locks",
            vec![
                Part::python_module()
                    .max_version((3, 6))
                    .internal()
                    .deps(&[
                        "asyncio",
                        "asyncio.compat",
                        "asyncio.coroutines",
                        "asyncio.events",
                        "asyncio.futures",
                        "collections",
                    ]),
                Part::python_module()
                    .min_version((3, 7))
                    .internal()
                    .deps(&[
                        "asyncio",
                        "asyncio.coroutines",
                        "asyncio.events",
                        "asyncio.futures",
                        "collections",
                        "warnings",
                    ]),
            ],
        ),
        ("asyncio.log", vec![Part::python_module().internal().deps(&["asyncio", "logging"])]),
        (
            "asyncio.proactor_events",
            vec![
                Part::python_module()
                    .max_version((3, 6))
                    .internal()
                    .deps(&[
                        "asyncio",
                        "asyncio.base_events",
                        "asyncio.compat",
                        "asyncio.constants",
                        "asyncio.futures",
                        "asyncio.log",
                        "asyncio.sslproto",
                        "asyncio.transports",
                        "socket",
                        "warnings",
                    ]),
                Part::python_module()
                    .min_version((3, 7))
                    .internal()
                    .deps(&[
                        "asyncio",
                        "asyncio.base_events",
                        "asyncio.constants",
                        "asyncio.events",
                        "asyncio.futures",
                        "asyncio.log",
                        "asyncio.protocols",
                        "asyncio.sslproto",
                        "asyncio.transports",
                        "io",
                        "os",
                        "socket",
                        "warnings",
                    ]),
            ],
        ),
        ("asyncio.protocols", vec![Part::python_module().internal().deps(&["asyncio"])]),
        (
            "asyncio.queues",
            vec![
                Part::python_module()
                    .max_version((3, 5, 2))
                    .internal()
                    .deps(&[
                        "asyncio",
                        "asyncio.compat",
                        "asyncio.coroutines",
                        "asyncio.events",
                        "asyncio.futures",
                        "asyncio.locks",
                        "collections",
                        "heapq",
                    ]),
                Part::python_module()
                    .min_version((3, 5, 3))
                    .max_version((3, 6))
                    .internal()
                    .deps(&[
                        "asyncio",
                        "asyncio.compat",
                        "asyncio.coroutines",
                        "asyncio.events",
                        "asyncio.locks",
                        "collections",
                        "heapq",
                    ]),
                Part::python_module()
                    .min_version((3, 7))
                    .internal()
                    .deps(&["asyncio", "asyncio.events", "asyncio.locks", "collections", "heapq"]),
            ],
        ),
        (
            "asyncio.runners",
            vec![
                Part::python_module()
                    .min_version((3, 7))
                    .internal()
                    .deps(&["asyncio", "asyncio.coroutines", "asyncio.events", "asyncio.tasks"]),
            ],
        ),
        (
            "asyncio.selector_events",
            vec![
                Part::python_module()
                    .max_version((3, 5, 2))
                    .internal()
                    .deps(&[
                        "asyncio",
                        "asyncio.base_events",
                        "asyncio.compat",
                        "asyncio.constants",
                        "asyncio.coroutines",
                        "asyncio.events",
                        "asyncio.futures",
                        "asyncio.log",
                        "asyncio.sslproto",
                        "asyncio.transports",
                        "collections",
                        "errno",
                        "functools",
                        "selectors",
                        "socket",
                        "?ssl",
                        "warnings",
                    ]),
                Part::python_module()
                    .min_version((3, 5, 3))
                    .max_version((3, 6))
                    .internal()
                    .deps(&[
                        "asyncio",
                        "asyncio.base_events",
                        "asyncio.compat",
                        "asyncio.constants",
                        "asyncio.coroutines",
                        "asyncio.events",
                        "asyncio.futures",
                        "asyncio.log",
                        "asyncio.sslproto",
                        "asyncio.transports",
                        "collections",
                        "errno",
                        "functools",
                        "selectors",
                        "socket",
                        "?ssl",
                        "warnings",
                        "weakref",
                    ]),
                Part::python_module()
                    .min_version((3, 7))
                    .internal()
                    .deps(&[
                        "asyncio",
                        "asyncio.base_events",
                        "asyncio.constants",
                        "asyncio.events",
                        "asyncio.futures",
                        "asyncio.log",
                        "asyncio.protocols",
                        "asyncio.sslproto",
                        "asyncio.transports",
                        "collections",
                        "errno",
                        "functools",
                        "selectors",
                        "socket",
                        "?ssl",
                        "warnings",
                        "weakref",
                    ]),
            ],
        ),
        (
            "asyncio.sslproto",
            vec![
                Part::python_module()
                    .max_version((3, 5, 2))
                    .internal()
                    .deps(&[
                        "asyncio",
                        "asyncio.compat",
                        "asyncio.log",
                        "asyncio.protocols",
                        "asyncio.transports",
                        "collections",
                        "?ssl",
                        "warnings",
                    ]),
                Part::python_module()
                    .min_version((3, 5, 3))
                    .max_version((3, 6))
                    .internal()
                    .deps(&[
                        "asyncio",
                        "asyncio.base_events",
                        "asyncio.compat",
                        "asyncio.log",
                        "asyncio.protocols",
                        "asyncio.transports",
                        "collections",
                        "?ssl",
                        "warnings",
                    ]),
                Part::python_module()
                    .min_version((3, 7))
                    .internal()
                    .deps(&[
                        "asyncio",
                        "asyncio.base_events",
                        "asyncio.constants",
                        "asyncio.log",
                        "asyncio.protocols",
                        "asyncio.transports",
                        "collections",
                        "?ssl",
                        "warnings",
                    ]),
            ],
        ),
        (
            "asyncio.streams",
            vec![
                Part::python_module()
                    .max_version((3, 5, 1))
                    .internal()
                    .deps(&[
                        "asyncio",
                        "asyncio.compat",
                        "asyncio.coroutines",
                        "asyncio.events",
                        "asyncio.futures",
                        "asyncio.log",
                        "asyncio.protocols",
                        "socket",
                    ]),
                Part::python_module()
                    .min_version((3, 5, 2))
                    .max_version((3, 6))
                    .internal()
                    .deps(&[
                        "asyncio",
                        "asyncio.compat",
                        "asyncio.coroutines",
                        "asyncio.events",
                        "asyncio.log",
                        "asyncio.protocols",
                        "socket",
                    ]),
                Part::python_module()
                    .min_version((3, 7))
                    .internal()
                    .deps(&[
                        "asyncio",
                        "asyncio.coroutines",
                        "asyncio.events",
                        "asyncio.log",
                        "asyncio.protocols",
                        "asyncio.tasks",
                        "socket",
                    ]),
            ],
        ),
        (
            "asyncio.subprocess",
            vec![
                Part::python_module()
                    .max_version((3, 6))
                    .internal()
                    .deps(&[
                        "asyncio",
                        "asyncio.coroutines",
                        "asyncio.events",
                        "asyncio.log",
                        "asyncio.protocols",
                        "asyncio.streams",
                        "asyncio.tasks",
                        "subprocess",
                    ]),
                Part::python_module()
                    .min_version((3, 7))
                    .internal()
                    .deps(&[
                        "asyncio",
                        "asyncio.events",
                        "asyncio.log",
                        "asyncio.protocols",
                        "asyncio.streams",
                        "asyncio.tasks",
                        "subprocess",
                    ]),
            ],
        ),
        (
            "asyncio.tasks",
            vec![
                Part::python_module()
                    .version((3, 5))
                    .internal()
                    .deps(&[
                        "asyncio",
                        "asyncio.compat",
                        "asyncio.coroutines",
                        "asyncio.events",
                        "asyncio.futures",
                        "asyncio.queues",
                        "asyncio.tasks",
                        "concurrent.futures",
                        "functools",
                        "inspect",
                        "linecache",
                        "traceback",
                        "warnings",
                        "weakref",
                    ]),
                Part::python_module()
                    .version((3, 6))
                    .internal()
                    .deps(&[
                        "asyncio",
                        "asyncio.base_tasks",
                        "asyncio.compat",
                        "asyncio.coroutines",
                        "asyncio.events",
                        "asyncio.futures",
                        "asyncio.queues",
                        "asyncio.tasks",
                        "_asyncio",
                        "concurrent.futures",
                        "functools",
                        "inspect",
                        "warnings",
                        "weakref",
                    ]),
                Part::python_module()
                    .min_version((3, 7))
                    .internal()
                    .deps(&[
                        "asyncio",
                        "asyncio.base_tasks",
                        "asyncio.coroutines",
                        "asyncio.events",
                        "asyncio.futures",
                        "asyncio.queues",
                        "asyncio.tasks",
                        "_asyncio",
                        "concurrent.futures",
                        "contextvars",
                        "functools",
                        "inspect",
                        "types",
                        "warnings",
                        "weakref",
                    ]),
            ],
        ),
        (
            "asyncio.transports",
            vec![
                Part::python_module()
                    .max_version((3, 6))
                    .internal()
                    .deps(&["asyncio", "asyncio.compat"]),
                Part::python_module().min_version((3, 7)).internal().deps(&["asyncio"]),
            ],
        ),
        (
            "asyncio.unix_events",
            vec![
                Part::python_module()
                    .max_version((3, 6))
                    .target("!win")
                    .internal()
                    .deps(&[
                        "asyncio",
                        "asyncio.base_events",
                        "asyncio.base_subprocess",
                        "asyncio.compat",
                        "asyncio.constants",
                        "asyncio.coroutines",
                        "asyncio.events",
                        "asyncio.futures",
                        "asyncio.log",
                        "asyncio.selector_events",
                        "asyncio.transports",
                        "errno",
                        "fcntl",
                        "os",
                        "selectors",
                        "signal",
                        "socket",
                        "stat",
                        "subprocess",
                        "threading",
                        "warnings",
                    ]),
                Part::python_module()
                    .min_version((3, 7))
                    .target("!win")
                    .internal()
                    .deps(&[
                        "asyncio",
                        "asyncio.base_events",
                        "asyncio.base_subprocess",
                        "asyncio.constants",
                        "asyncio.coroutines",
                        "asyncio.events",
                        "asyncio.futures",
                        "asyncio.log",
                        "asyncio.selector_events",
                        "asyncio.transports",
                        "errno",
                        "io",
                        "os",
                        "selectors",
                        "signal",
                        "socket",
                        "stat",
                        "subprocess",
                        "threading",
                        "warnings",
                    ]),
            ],
        ),
        (
            "asyncio.windows_events",
            vec![
                Part::python_module()
                    .max_version((3, 6))
                    .target("win")
                    .internal()
                    .deps(&[
                        "asyncio",
                        "asyncio.events",
                        "asyncio.base_subprocess",
                        "asyncio.coroutines",
                        "asyncio.futures",
                        "asyncio.log",
                        "asyncio.proactor_events",
                        "asyncio.selector_events",
                        "asyncio.tasks",
                        "asyncio.windows_utils",
                        "errno",
                        "math",
                        "_overlapped",
                        "socket",
                        "struct",
                        "weakref",
                        "_winapi",
                    ]),
                Part::python_module()
                    .min_version((3, 7))
                    .max_version((3, 7, 2))
                    .target("win")
                    .internal()
                    .deps(&[
                        "asyncio",
                        "asyncio.events",
                        "asyncio.base_subprocess",
                        "asyncio.futures",
                        "asyncio.log",
                        "asyncio.proactor_events",
                        "asyncio.selector_events",
                        "asyncio.tasks",
                        "asyncio.windows_utils",
                        "errno",
                        "math",
                        "msvcrt",
                        "_overlapped",
                        "socket",
                        "struct",
                        "weakref",
                        "_winapi",
                    ]),
                Part::python_module()
                    .min_version((3, 7, 3))
                    .target("win")
                    .internal()
                    .deps(&[
                        "asyncio",
                        "asyncio.events",
                        "asyncio.base_subprocess",
                        "asyncio.futures",
                        "asyncio.log",
                        "asyncio.proactor_events",
                        "asyncio.selector_events",
                        "asyncio.tasks",
                        "asyncio.windows_utils",
                        "errno",
                        "math",
                        "msvcrt",
                        "_overlapped",
                        "socket",
                        "struct",
                        "time",
                        "weakref",
                        "_winapi",
                    ]),
            ],
        ),
        (
            "asyncio.windows_utils",
            vec![
                Part::python_module()
                    .max_version((3, 6))
                    .target("win")
                    .internal()
                    .deps(&[
                        "asyncio",
                        "itertools",
                        "msvcrt",
                        "os",
                        "socket",
                        "subprocess",
                        "tempfile",
                        "warnings",
                        "_winapi",
                    ]),
                Part::python_module()
                    .min_version((3, 7))
                    .target("win")
                    .internal()
                    .deps(&[
                        "asyncio",
                        "itertools",
                        "msvcrt",
                        "os",
                        "subprocess",
                        "tempfile",
                        "warnings",
                        "_winapi",
                    ]),
            ],
        ),
        (
            "asyncore",
            vec![
                Part::python_module()
                    .deps(&["errno", "os", "select", "socket", "time", "warnings"]),
            ],
        ),
        ("atexit", vec![Part::core_extension_module()]),
        (
            "audioop",
            vec![
                Part::extension_module().max_version((3, 5, 1)).source(&["audioop.c"]),
                Part::extension_module()
                    .min_version((3, 5, 2))
                    .libs(&["linux#-lm"])
                    .source(&["audioop.c"]),
            ],
        ),
        ("base64", vec![Part::python_module().deps(&["binascii", "re", "struct", "warnings"])]),
        (
            "bdb",
            vec![
                Part::python_module().deps(&["fnmatch", "inspect", "linecache", "os", "reprlib"]),
            ],
        ),
        ("binascii", vec![Part::extension_module().source(&["binascii.c"])]),
        ("binhex", vec![Part::python_module().deps(&["binascii", "io", "os", "struct"])]),
        ("bisect", vec![Part::python_module().deps(&["_bisect"])]),
        (
            "bz2",
            vec![
                Part::python_module()
                    .version((3, 5))
                    .deps(&["_compression", "_bz2", "io", "threading", "warnings"]),
                Part::python_module()
                    .min_version((3, 6))
                    .deps(&["_compression", "_bz2", "io", "os", "threading", "warnings"]),
            ],
        ),
        (
            "cProfile",
            vec![
                Part::python_module().deps(&["_lsprof", "marshal", "profile", "pstats"]),
            ],
        ),
        (
            "calendar",
            vec![
                Part::python_module().max_version((3, 5, 2)).deps(&["datetime", "locale"]),
                Part::python_module()
                    .min_version((3, 5, 3))
                    .deps(&["datetime", "itertools", "locale"]),
            ],
        ),
        (
            "cgi",
            vec![
                Part::python_module()
                    .max_version((3, 6))
                    .deps(&[
                        "collections",
                        "email.message",
                        "email.parser",
                        "html",
                        "http.client",
                        "io",
                        "locale",
                        "os",
                        "re",
                        "tempfile",
                        "traceback",
                        "urllib.parse",
                        "warnings",
                    ]),
                Part::python_module()
                    .min_version((3, 7))
                    .deps(&[
                        "collections.abc",
                        "email.message",
                        "email.parser",
                        "html",
                        "io",
                        "locale",
                        "os",
                        "re",
                        "tempfile",
                        "traceback",
                        "urllib.parse",
                        "warnings",
                    ]),
            ],
        ),
        (
            "cgitb",
            vec![
                Part::python_module()
                    .deps(&[
                        "inspect",
                        "keyword",
                        "linecache",
                        "os",
                        "pydoc",
                        "tempfile",
                        "time",
                        "tokenize",
                        "traceback",
                    ]),
            ],
        ),
        ("chunk", vec![Part::python_module().deps(&["struct"])]),
        (
            "cmath",
            vec![
                Part::extension_module().libs(&["linux#-lm"]).source(&["cmathmodule.c", "_math.c"]),
            ],
        ),
        ("cmd", vec![Part::python_module().deps(&["string"])]),
        (
            "code",
            vec![
                Part::python_module()
                    .max_version((3, 6))
                    .deps(&["argparse", "codeop", "traceback"]),
                Part::python_module().min_version((3, 7)).deps(&["codeop", "traceback"]),
            ],
        ),
        ("codecs", vec![Part::python_module().deps(&["_codecs"])]),
        (
            "codeop",
            vec![
                Part::python_module().max_version((3, 7, 7)).deps(&["__future__"]),
                Part::python_module().min_version((3, 7, 8)).deps(&["__future__", "warnings"]),
            ],
        ),
        (
            "collections",
            vec![
                Part::python_module()
                    .version((3, 5, 0))
                    .deps(&[
                        "_collections",
                        "_collections_abc",
                        "copy",
                        "heapq",
                        "itertools",
                        "keyword",
                        "operator",
                        "reprlib",
                        "_weakref",
                    ]),
                Part::python_module()
                    .min_version((3, 5, 1))
                    .deps(&[
                        "_collections",
                        "_collections_abc",
                        "copy",
                        "heapq",
                        "itertools",
                        "keyword",
                        "operator",
                        "reprlib",
                        "warnings",
                        "_weakref",
                    ]),
            ],
        ),
        ("collections.abc", vec![Part::python_module().deps(&["_collections_abc"])]),
        ("colorsys", vec![Part::python_module()]),
        (
            "compileall",
            vec![
                Part::python_module()
                    .deps(&[
                        "concurrent.futures",
                        "functools",
                        "importlib.util",
                        "os",
                        "py_compile",
                        "struct",
                    ]),
            ],
        ),
        ("concurrent", vec![Part::python_module()]),
        (
            "concurrent.futures",
            vec![
                Part::python_module()
                    .deps(&[
                        "concurrent",
                        "concurrent.futures._base",
                        "concurrent.futures.process",
                        "concurrent.futures.thread",
                    ]),
            ],
        ),
        (
            "concurrent.futures._base",
            vec![
                Part::python_module()
                    .internal()
                    .deps(&["concurrent.futures", "collections", "logging", "threading", "time"]),
            ],
        ),
        (
            "concurrent.futures.process",
            vec![
                Part::python_module()
                    .internal()
                    .deps(&[
                        "concurrent.futures",
                        "atexit",
                        "concurrent.futures._base",
                        "functools",
                        "itertools",
                        "multiprocessing",
                        "multiprocessing.connection",
                        "multiprocessing.queues",
                        "os",
                        "queue",
                        "threading",
                        "traceback",
                        "weakref",
                    ]),
            ],
        ),
        (
            "concurrent.futures.thread",
            vec![
                Part::python_module()
                    .max_version((3, 6, 2))
                    .internal()
                    .deps(&[
                        "concurrent.futures",
                        "atexit",
                        "concurrent.futures._base",
                        "os",
                        "queue",
                        "threading",
                        "weakref",
                    ]),
                Part::python_module()
                    .min_version((3, 6, 3))
                    .internal()
                    .deps(&[
                        "concurrent.futures",
                        "atexit",
                        "concurrent.futures._base",
                        "itertools",
                        "os",
                        "queue",
                        "threading",
                        "weakref",
                    ]),
            ],
        ),
        (
            "configparser",
            vec![
                Part::python_module()
                    .max_version((3, 6, 0))
                    .deps(&[
                        "collections",
                        "collections.abc",
                        "functools",
                        "io",
                        "itertools",
                        "re",
                        "warnings",
                    ]),
                Part::python_module()
                    .min_version((3, 6, 1))
                    .deps(&[
                        "collections",
                        "collections.abc",
                        "functools",
                        "io",
                        "itertools",
                        "os",
                        "re",
                        "warnings",
                    ]),
            ],
        ),
        (
            "contextlib",
            vec![
                Part::python_module().version((3, 5)).deps(&["collections", "functools"]),
                Part::python_module()
                    .min_version((3, 6))
                    .max_version((3, 6, 1))
                    .deps(&["abc", "collections", "functools"]),
                Part::python_module()
                    .min_version((3, 6, 2))
                    .deps(&["abc", "collections", "_collections_abc", "functools"]),
            ],
        ),
        ("contextvars", vec![Part::python_module().min_version((3, 7)).deps(&["_contextvars"])]),
        ("copy", vec![Part::python_module().deps(&["copyreg", "types", "weakref"])]),
        ("copyreg", vec![Part::python_module()]),
        (
            "crypt",
            vec![
                Part::python_module()
                    .target("!win")
                    .deps(&["collections", "_crypt", "random", "string"]),
            ],
        ),
        (
            "csv",
            vec![
                Part::python_module().version((3, 5)).deps(&["_csv", "io", "re"]),
                Part::python_module()
                    .min_version((3, 6))
                    .deps(&["collections", "_csv", "io", "re"]),
            ],
        ),
        (
            "ctypes",
            vec![
                Part::python_module()
                    .target("linux|macos|win")
                    .deps(&["_ctypes", "ctypes._endian", "os", "struct"]),
            ],
        ),
        (
            "ctypes._endian",
            vec![
                Part::python_module().target("linux|macos|win").internal().deps(&["ctypes"]),
            ],
        ),
        (
            "ctypes.macholib",
            vec![
                Part::python_module().target("macos").internal().deps(&["ctypes"]),
            ],
        ),
        (
            "ctypes.macholib.dyld",
            vec![
                Part::python_module()
                    .target("macos")
                    .internal()
                    .deps(&[
                        "ctypes.macholib",
                        "ctypes.macholib.dylib",
                        "ctypes.macholib.framework",
                        "itertools",
                        "os",
                    ]),
            ],
        ),
        (
            "ctypes.macholib.dylib",
            vec![
                Part::python_module().target("macos").internal().deps(&["ctypes.macholib", "re"]),
            ],
        ),
        (
            "ctypes.macholib.framework",
            vec![
                Part::python_module().target("macos").internal().deps(&["ctypes.macholib", "re"]),
            ],
        ),
        (
            "ctypes.util",
            vec![
                Part::python_module()
                    .max_version((3, 5, 2))
                    .target("linux|macos|win")
                    .deps(&[
                        "ctypes",
                        "contextlib",
                        "ctypes.macholib.dyld",
                        "importlib.machinery",
                        "os",
                        "re",
                        "struct",
                        "subprocess",
                        "tempfile",
                    ]),
                Part::python_module()
                    .min_version((3, 5, 3))
                    .target("linux|macos|win")
                    .deps(&[
                        "ctypes",
                        "ctypes.macholib.dyld",
                        "importlib.machinery",
                        "os",
                        "re",
                        "shutil",
                        "struct",
                        "subprocess",
                        "tempfile",
                    ]),
            ],
        ),
        ("ctypes.wintypes", vec![Part::python_module().target("win").deps(&["ctypes"])]),
        (
            "curses",
            vec![
                Part::python_module().target("!win").deps(&["curses.has_key", "_curses", "os"]),
            ],
        ),
        ("curses.ascii", vec![Part::python_module().target("!win").deps(&["curses"])]),
        (
            "curses.has_key",
            vec![
                Part::python_module().target("!win").internal().deps(&["curses", "_curses"]),
            ],
        ),
        (
            "curses.panel",
            vec![
                Part::python_module().target("!win").deps(&["curses", "_curses_panel"]),
            ],
        ),
        (
            "curses.textpad",
            vec![
                Part::python_module().target("!win").deps(&["curses", "curses.ascii"]),
            ],
        ),
        (
            "dataclasses",
            vec![
                Part::python_module()
                    .min_version((3, 7))
                    .max_version((3, 7, 1))
                    .deps(&["copy", "inspect", "keyword", "re", "types"]),
                Part::python_module()
                    .min_version((3, 7, 2))
                    .deps(&["copy", "functools", "inspect", "keyword", "re", "_thread", "types"]),
            ],
        ),
        ("datetime", vec![Part::python_module().deps(&["_datetime", "math", "_strptime", "time"])]),
        ("dbm", vec![Part::python_module().deps(&["io", "os", "struct"])]),
        (
            "dbm.dumb",
            vec![
                Part::python_module()
                    .version((3, 5))
                    .deps(&["dbm", "ast", "collections", "io", "os"]),
                Part::python_module()
                    .version((3, 6))
                    .deps(&["dbm", "ast", "collections", "io", "os", "warnings"]),
                Part::python_module()
                    .min_version((3, 7))
                    .deps(&["dbm", "ast", "collections.abc", "io", "os", "warnings"]),
            ],
        ),
        ("dbm.gnu", vec![Part::python_module().target("!win").deps(&["dbm", "_gdbm"])]),
        ("dbm.ndbm", vec![Part::python_module().target("!win").deps(&["dbm", "_dbm"])]),
        ("decimal", vec![Part::python_module().deps(&["_pydecimal"])]),
        ("difflib", vec![Part::python_module().deps(&["collections", "heapq", "re"])]),
        ("dis", vec![Part::python_module().deps(&["collections", "io", "opcode", "types"])]),
        ("distutils", vec![Part::python_module()]),
        (
            "distutils._msvccompiler",
            vec![
                Part::python_module()
                    .max_version((3, 6, 2))
                    .target("win")
                    .deps(&[
                        "distutils.ccompiler",
                        "distutils.errors",
                        "distutils.log",
                        "distutils.util",
                        "itertools",
                        "os",
                        "shutil",
                        "stat",
                        "subprocess",
                        "winreg",
                    ]),
                Part::python_module()
                    .min_version((3, 6, 3))
                    .max_version((3, 6, 4))
                    .target("win")
                    .deps(&[
                        "distutils.ccompiler",
                        "distutils.errors",
                        "distutils.log",
                        "distutils.util",
                        "_findvs",
                        "glob",
                        "itertools",
                        "os",
                        "shutil",
                        "stat",
                        "subprocess",
                        "threading",
                        "winreg",
                    ]),
                Part::python_module()
                    .min_version((3, 6, 5))
                    .max_version((3, 7, 1))
                    .target("win")
                    .deps(&[
                        "distutils.ccompiler",
                        "distutils.errors",
                        "_distutils_findvs",
                        "distutils.log",
                        "distutils.util",
                        "glob",
                        "itertools",
                        "os",
                        "shutil",
                        "stat",
                        "subprocess",
                        "threading",
                        "winreg",
                    ]),
                Part::python_module()
                    .min_version((3, 7, 2))
                    .max_version((3, 7, 6))
                    .target("win")
                    .deps(&[
                        "distutils.ccompiler",
                        "distutils.errors",
                        "distutils.log",
                        "distutils.util",
                        "glob",
                        "itertools",
                        "json",
                        "os",
                        "shutil",
                        "stat",
                        "subprocess",
                        "winreg",
                    ]),
                Part::python_module()
                    .min_version((3, 7, 7))
                    .target("win")
                    .deps(&[
                        "distutils.ccompiler",
                        "distutils.errors",
                        "distutils.log",
                        "distutils.util",
                        "itertools",
                        "json",
                        "os",
                        "shutil",
                        "stat",
                        "subprocess",
                        "winreg",
                    ]),
            ],
        ),
        (
            "distutils.archive_util",
            vec![
                Part::python_module()
                    .deps(&[
                        "distutils.dir_util",
                        "distutils.errors",
                        "distutils.log",
                        "distutils.spawn",
                        "!win#grp",
                        "os",
                        "!win#pwd",
                        "tarfile",
                        "warnings",
                        "zipfile",
                    ]),
            ],
        ),
        (
            "distutils.bcppcompiler",
            vec![
                Part::python_module()
                    .deps(&[
                        "distutils.ccompiler",
                        "distutils.dep_util",
                        "distutils.errors",
                        "distutils.file_util",
                        "distutils.log",
                        "os",
                    ]),
            ],
        ),
        (
            "distutils.ccompiler",
            vec![
                Part::python_module()
                    .deps(&[
                        "distutils.debug",
                        "distutils.dep_util",
                        "distutils.dir_util",
                        "distutils.errors",
                        "distutils.fancy_getopt",
                        "distutils.file_util",
                        "distutils.log",
                        "distutils.spawn",
                        "distutils.sysconfig",
                        "distutils.util",
                        "os",
                        "re",
                        "tempfile",
                    ]),
            ],
        ),
        (
            "distutils.cmd",
            vec![
                Part::python_module()
                    .deps(&[
                        "distutils.archive_util",
                        "distutils.debug",
                        "distutils.dep_util",
                        "distutils.dir_util",
                        "distutils.dist",
                        "distutils.errors",
                        "distutils.fancy_getopt",
                        "distutils.file_util",
                        "distutils.log",
                        "distutils.spawn",
                        "distutils.util",
                        "os",
                        "re",
                    ]),
            ],
        ),
        ("distutils.command", vec![Part::python_module()]),
        (
            "distutils.command.bdist",
            vec![
                Part::python_module()
                    .deps(&[
                        "distutils.core",
                        "distutils.errors",
                        "distutils.fancy_getopt",
                        "distutils.util",
                        "os",
                    ]),
            ],
        ),
        (
            "distutils.command.bdist_dumb",
            vec![
                Part::python_module()
                    .deps(&[
                        "distutils.core",
                        "distutils.dir_util",
                        "distutils.errors",
                        "distutils.log",
                        "distutils.sysconfig",
                        "distutils.util",
                        "os",
                    ]),
            ],
        ),
        (
            "distutils.command.bdist_msi",
            vec![
                Part::python_module()
                    .target("win")
                    .deps(&[
                        "distutils.core",
                        "distutils.dir_util",
                        "distutils.errors",
                        "distutils.log",
                        "distutils.sysconfig",
                        "distutils.util",
                        "distutils.version",
                        "msilib",
                        "os",
                    ]),
            ],
        ),
        (
            "distutils.command.bdist_rpm",
            vec![
                Part::python_module()
                    .deps(&[
                        "distutils.core",
                        "distutils.debug",
                        "distutils.errors",
                        "distutils.file_util",
                        "distutils.log",
                        "distutils.sysconfig",
                        "distutils.util",
                        "os",
                        "subprocess",
                    ]),
            ],
        ),
        (
            "distutils.command.bdist_wininst",
            vec![
                Part::python_module()
                    .target("win")
                    .deps(&[
                        "distutils.core",
                        "distutils.dir_util",
                        "distutils.errors",
                        "distutils.log",
                        "distutils.sysconfig",
                        "distutils.util",
                        "msvcrt",
                        "os",
                        "struct",
                        "tempfile",
                        "time",
                    ]),
            ],
        ),
        (
            "distutils.command.build",
            vec![
                Part::python_module()
                    .deps(&[
                        "distutils.ccompiler",
                        "distutils.core",
                        "distutils.errors",
                        "distutils.util",
                        "os",
                    ]),
            ],
        ),
        (
            "distutils.command.build_clib",
            vec![
                Part::python_module()
                    .deps(&[
                        "distutils.ccompiler",
                        "distutils.core",
                        "distutils.errors",
                        "distutils.log",
                        "distutils.sysconfig",
                        "os",
                    ]),
            ],
        ),
        (
            "distutils.command.build_ext",
            vec![
                Part::python_module()
                    .deps(&[
                        "concurrent.futures",
                        "contextlib",
                        "distutils.ccompiler",
                        "distutils.core",
                        "distutils.dep_util",
                        "distutils.errors",
                        "distutils.extension",
                        "distutils.log",
                        "win#distutils._msvccompiler",
                        "distutils.sysconfig",
                        "distutils.util",
                        "os",
                        "re",
                    ]),
            ],
        ),
        (
            "distutils.command.build_py",
            vec![
                Part::python_module()
                    .deps(&[
                        "distutils.core",
                        "distutils.errors",
                        "distutils.log",
                        "distutils.util",
                        "glob",
                        "importlib.util",
                        "os",
                    ]),
            ],
        ),
        (
            "distutils.command.build_scripts",
            vec![
                Part::python_module()
                    .deps(&[
                        "distutils.core",
                        "distutils.dep_util",
                        "distutils.log",
                        "distutils.sysconfig",
                        "distutils.util",
                        "os",
                        "re",
                        "stat",
                        "tokenize",
                    ]),
            ],
        ),
        (
            "distutils.command.check",
            vec![
                Part::python_module().deps(&["distutils.core", "distutils.errors"]),
            ],
        ),
        (
            "distutils.command.clean",
            vec![
                Part::python_module()
                    .deps(&["distutils.core", "distutils.dir_util", "distutils.log", "os"]),
            ],
        ),
        (
            "distutils.command.config",
            vec![
                Part::python_module()
                    .deps(&[
                        "distutils.ccompiler",
                        "distutils.core",
                        "distutils.errors",
                        "distutils.log",
                        "distutils.sysconfig",
                        "os",
                        "re",
                    ]),
            ],
        ),
        (
            "distutils.command.install",
            vec![
                Part::python_module()
                    .deps(&[
                        "distutils.core",
                        "distutils.debug",
                        "distutils.errors",
                        "distutils.fancy_getopt",
                        "distutils.file_util",
                        "distutils.log",
                        "distutils.sysconfig",
                        "distutils.util",
                        "os",
                        "pprint",
                    ]),
            ],
        ),
        (
            "distutils.command.install_data",
            vec![
                Part::python_module().deps(&["distutils.core", "distutils.util", "os"]),
            ],
        ),
        (
            "distutils.command.install_egg_info",
            vec![
                Part::python_module()
                    .deps(&["distutils.cmd", "distutils.dir_util", "distutils.log", "os", "re"]),
            ],
        ),
        (
            "distutils.command.install_headers",
            vec![
                Part::python_module().deps(&["distutils.core"]),
            ],
        ),
        (
            "distutils.command.install_lib",
            vec![
                Part::python_module()
                    .deps(&[
                        "distutils.core",
                        "distutils.errors",
                        "distutils.util",
                        "importlib.util",
                        "os",
                    ]),
            ],
        ),
        (
            "distutils.command.install_scripts",
            vec![
                Part::python_module().deps(&["distutils.core", "distutils.log", "os", "stat"]),
            ],
        ),
        (
            "distutils.command.register",
            vec![
                Part::python_module()
                    .version((3, 5))
                    .deps(&[
                        "distutils.core",
                        "distutils.errors",
                        "distutils.log",
                        "getpass",
                        "io",
                        "os",
                        "string",
                        "urllib.parse",
                        "urllib.request",
                        "warnings",
                    ]),
                Part::python_module()
                    .min_version((3, 6))
                    .deps(&[
                        "distutils.core",
                        "distutils.errors",
                        "distutils.log",
                        "getpass",
                        "io",
                        "urllib.parse",
                        "urllib.request",
                        "warnings",
                    ]),
            ],
        ),
        (
            "distutils.command.sdist",
            vec![
                Part::python_module()
                    .version((3, 5))
                    .deps(&[
                        "distutils.archive_util",
                        "distutils.core",
                        "distutils.dep_util",
                        "distutils.dir_util",
                        "distutils.errors",
                        "distutils.fancy_getopt",
                        "distutils.file_util",
                        "distutils.filelist",
                        "distutils.log",
                        "distutils.text_file",
                        "distutils.util",
                        "glob",
                        "os",
                        "string",
                        "types",
                        "warnings",
                    ]),
                Part::python_module()
                    .version((3, 6))
                    .deps(&[
                        "distutils.archive_util",
                        "distutils.core",
                        "distutils.dep_util",
                        "distutils.dir_util",
                        "distutils.errors",
                        "distutils.fancy_getopt",
                        "distutils.file_util",
                        "distutils.filelist",
                        "distutils.log",
                        "distutils.text_file",
                        "distutils.util",
                        "glob",
                        "os",
                        "types",
                        "warnings",
                    ]),
                Part::python_module()
                    .min_version((3, 7))
                    .deps(&[
                        "distutils.archive_util",
                        "distutils.core",
                        "distutils.dir_util",
                        "distutils.errors",
                        "distutils.fancy_getopt",
                        "distutils.file_util",
                        "distutils.filelist",
                        "distutils.log",
                        "distutils.text_file",
                        "distutils.util",
                        "glob",
                        "os",
                        "warnings",
                    ]),
            ],
        ),
        (
            "distutils.command.upload",
            vec![
                Part::python_module()
                    .deps(&[
                        "base64",
                        "distutils.core",
                        "distutils.errors",
                        "distutils.log",
                        "distutils.spawn",
                        "hashlib",
                        "io",
                        "os",
                        "platform",
                        "urllib.parse",
                        "urllib.request",
                    ]),
            ],
        ),
        (
            "distutils.config",
            vec![
                Part::python_module().deps(&["cgi", "configparser", "distutils.cmd", "os"]),
            ],
        ),
        (
            "distutils.core",
            vec![
                Part::python_module()
                    .deps(&[
                        "distutils.cmd",
                        "distutils.config",
                        "distutils.debug",
                        "distutils.dist",
                        "distutils.errors",
                        "distutils.extension",
                        "os",
                    ]),
            ],
        ),
        (
            "distutils.cygwinccompiler",
            vec![
                Part::python_module()
                    .deps(&[
                        "copy",
                        "distutils.ccompiler",
                        "distutils.errors",
                        "distutils.file_util",
                        "distutils.log",
                        "distutils.spawn",
                        "distutils.sysconfig",
                        "distutils.unixccompiler",
                        "distutils.version",
                        "os",
                        "re",
                        "subprocess",
                    ]),
            ],
        ),
        ("distutils.debug", vec![Part::python_module().deps(&["os"])]),
        (
            "distutils.dep_util",
            vec![
                Part::python_module().deps(&["distutils.errors", "os", "stat"]),
            ],
        ),
        (
            "distutils.dir_util",
            vec![
                Part::python_module()
                    .deps(&[
                        "distutils.errors",
                        "distutils.file_util",
                        "distutils.log",
                        "errno",
                        "os",
                    ]),
            ],
        ),
        (
            "distutils.dist",
            vec![
                Part::python_module()
                    .deps(&[
                        "configparser",
                        "distutils.cmd",
                        "distutils.command",
                        "distutils.core",
                        "distutils.debug",
                        "distutils.errors",
                        "distutils.fancy_getopt",
                        "distutils.log",
                        "distutils.util",
                        "distutils.versionpredicate",
                        "email",
                        "os",
                        "pprint",
                        "re",
                        "warnings",
                    ]),
            ],
        ),
        ("distutils.errors", vec![Part::python_module()]),
        (
            "distutils.extension",
            vec![
                Part::python_module()
                    .deps(&[
                        "distutils.sysconfig",
                        "distutils.text_file",
                        "distutils.util",
                        "os",
                        "warnings",
                    ]),
            ],
        ),
        (
            "distutils.fancy_getopt",
            vec![
                Part::python_module().deps(&["distutils.errors", "getopt", "re", "string"]),
            ],
        ),
        (
            "distutils.file_util",
            vec![
                Part::python_module()
                    .deps(&[
                        "distutils.dep_util",
                        "distutils.errors",
                        "distutils.log",
                        "errno",
                        "os",
                        "stat",
                    ]),
            ],
        ),
        (
            "distutils.filelist",
            vec![
                Part::python_module()
                    .max_version((3, 5, 2))
                    .deps(&[
                        "distutils.debug",
                        "distutils.errors",
                        "distutils.log",
                        "distutils.util",
                        "fnmatch",
                        "os",
                        "re",
                        "stat",
                    ]),
                Part::python_module()
                    .min_version((3, 5, 3))
                    .deps(&[
                        "distutils.debug",
                        "distutils.errors",
                        "distutils.log",
                        "distutils.util",
                        "fnmatch",
                        "functools",
                        "os",
                        "re",
                    ]),
            ],
        ),
        ("distutils.log", vec![Part::python_module()]),
        (
            "distutils.msvc9compiler",
            vec![
                Part::python_module()
                    .target("win")
                    .deps(&[
                        "distutils.ccompiler",
                        "distutils.errors",
                        "distutils.log",
                        "distutils.util",
                        "os",
                        "re",
                        "subprocess",
                        "winreg",
                    ]),
            ],
        ),
        (
            "distutils.msvccompiler",
            vec![
                Part::python_module()
                    .target("win")
                    .deps(&[
                        "distutils.ccompiler",
                        "distutils.errors",
                        "distutils.log",
                        "distutils.msvc9compiler",
                        "os",
                        "winreg",
                    ]),
            ],
        ),
        (
            "distutils.spawn",
            vec![
                Part::python_module()
                    .deps(&[
                        "distutils.debug",
                        "distutils.errors",
                        "distutils.log",
                        "distutils.sysconfig",
                        "os",
                    ]),
            ],
        ),
        (
            "distutils.sysconfig",
            vec![
                Part::python_module()
                    .deps(&[
                        "distutils.errors",
                        "distutils.text_file",
                        "_imp",
                        "os",
                        "ios|macos#_osx_support",
                        "re",
                        "warnings",
                    ]),
            ],
        ),
        (
            "distutils.text_file",
            vec![
                Part::python_module().version((3, 5)).deps(&["io", "os"]),
                Part::python_module().min_version((3, 6)).deps(&["io"]),
            ],
        ),
        (
            "distutils.unixccompiler",
            vec![
                Part::python_module()
                    .deps(&[
                        "distutils.ccompiler",
                        "distutils.dep_util",
                        "distutils.errors",
                        "distutils.log",
                        "distutils.sysconfig",
                        "os",
                        "ios|macos#_osx_support",
                        "re",
                    ]),
            ],
        ),
        (
            "distutils.util",
            vec![
                Part::python_module()
                    .version((3, 5))
                    .deps(&[
                        "distutils.dep_util",
                        "distutils.errors",
                        "distutils.log",
                        "distutils.spawn",
                        "distutils.sysconfig",
                        "importlib.util",
                        "os",
                        "ios|macos#_osx_support",
                        "!win#pwd",
                        "py_compile",
                        "re",
                        "string",
                        "tempfile",
                    ]),
                Part::python_module()
                    .min_version((3, 6))
                    .deps(&[
                        "distutils.dep_util",
                        "distutils.errors",
                        "distutils.log",
                        "distutils.spawn",
                        "distutils.sysconfig",
                        "importlib.util",
                        "os",
                        "ios|macos#_osx_support",
                        "!win#pwd",
                        "py_compile",
                        "re",
                        "string",
                        "subprocess",
                        "tempfile",
                    ]),
            ],
        ),
        ("distutils.version", vec![Part::python_module().deps(&["re"])]),
        (
            "distutils.versionpredicate",
            vec![
                Part::python_module().deps(&["distutils.version", "operator", "re"]),
            ],
        ),
        ("email", vec![Part::python_module().deps(&["email.parser"])]),
        (
            "email._encoded_words",
            vec![
                Part::python_module()
                    .internal()
                    .deps(&[
                        "email",
                        "base64",
                        "binascii",
                        "email.errors",
                        "functools",
                        "re",
                        "string",
                    ]),
            ],
        ),
        (
            "email._header_value_parser",
            vec![
                Part::python_module()
                    .internal()
                    .deps(&[
                        "email",
                        "collections",
                        "email._encoded_words",
                        "email.errors",
                        "email.utils",
                        "operator",
                        "re",
                        "string",
                        "urllib",
                    ]),
            ],
        ),
        (
            "email._parseaddr",
            vec![
                Part::python_module().internal().deps(&["email", "calendar", "time"]),
            ],
        ),
        (
            "email._policybase",
            vec![
                Part::python_module()
                    .internal()
                    .deps(&["email", "abc", "email.charset", "email.header", "email.utils"]),
            ],
        ),
        (
            "email.base64mime",
            vec![
                Part::python_module().internal().deps(&["email", "base64", "binascii"]),
            ],
        ),
        (
            "email.charset",
            vec![
                Part::python_module()
                    .deps(&[
                        "email",
                        "email.base64mime",
                        "email.encoders",
                        "email.errors",
                        "email.quoprimime",
                        "functools",
                    ]),
            ],
        ),
        (
            "email.contentmanager",
            vec![
                Part::python_module()
                    .deps(&[
                        "email",
                        "binascii",
                        "email.charset",
                        "email.errors",
                        "email.message",
                        "email.quoprimime",
                    ]),
            ],
        ),
        ("email.encoders", vec![Part::python_module().deps(&["email", "base64", "quopri"])]),
        ("email.errors", vec![Part::python_module().deps(&["email"])]),
        (
            "email.feedparser",
            vec![
                Part::python_module()
                    .max_version((3, 5, 2))
                    .internal()
                    .deps(&[
                        "email",
                        "collections",
                        "email.errors",
                        "email.message",
                        "email._policybase",
                        "re",
                    ]),
                Part::python_module()
                    .min_version((3, 5, 3))
                    .internal()
                    .deps(&[
                        "email",
                        "collections",
                        "email.errors",
                        "email.message",
                        "email._policybase",
                        "io",
                        "re",
                    ]),
            ],
        ),
        (
            "email.generator",
            vec![
                Part::python_module()
                    .deps(&["email", "copy", "email.utils", "io", "random", "re", "time"]),
            ],
        ),
        (
            "email.header",
            vec![
                Part::python_module()
                    .deps(&[
                        "email",
                        "binascii",
                        "email.base64mime",
                        "email.charset",
                        "email.errors",
                        "email.quoprimime",
                        "re",
                    ]),
            ],
        ),
        (
            "email.headerregistry",
            vec![
                Part::python_module()
                    .deps(&[
                        "email",
                        "email.errors",
                        "email._header_value_parser",
                        "email.utils",
                        "types",
                    ]),
            ],
        ),
        ("email.iterators", vec![Part::python_module().deps(&["email", "io"])]),
        (
            "email.message",
            vec![
                Part::python_module()
                    .version((3, 5))
                    .deps(&[
                        "email",
                        "email.charset",
                        "email._encoded_words",
                        "email.errors",
                        "email.generator",
                        "email.iterators",
                        "email.policy",
                        "email._policybase",
                        "email.utils",
                        "io",
                        "quopri",
                        "re",
                        "uu",
                        "warnings",
                    ]),
                Part::python_module()
                    .min_version((3, 6))
                    .deps(&[
                        "email",
                        "email.charset",
                        "email._encoded_words",
                        "email.errors",
                        "email.generator",
                        "email.iterators",
                        "email.policy",
                        "email._policybase",
                        "email.utils",
                        "io",
                        "quopri",
                        "re",
                        "uu",
                    ]),
            ],
        ),
        ("email.mime", vec![Part::python_module().deps(&["email"])]),
        (
            "email.mime.application",
            vec![
                Part::python_module()
                    .deps(&["email.mime", "email.encoders", "email.mime.nonmultipart"]),
            ],
        ),
        (
            "email.mime.audio",
            vec![
                Part::python_module()
                    .deps(&[
                        "email.mime",
                        "email.encoders",
                        "email.mime.nonmultipart",
                        "io",
                        "sndhdr",
                    ]),
            ],
        ),
        (
            "email.mime.base",
            vec![
                Part::python_module().version((3, 5)).deps(&["email.mime", "email.message"]),
                Part::python_module()
                    .min_version((3, 6))
                    .deps(&["email.mime", "email.message", "email.policy"]),
            ],
        ),
        (
            "email.mime.image",
            vec![
                Part::python_module()
                    .deps(&["email.mime", "email.encoders", "email.mime.nonmultipart", "imghdr"]),
            ],
        ),
        (
            "email.mime.message",
            vec![
                Part::python_module()
                    .deps(&["email.mime", "email.message", "email.mime.nonmultipart"]),
            ],
        ),
        (
            "email.mime.multipart",
            vec![
                Part::python_module().deps(&["email.mime", "email.mime.base"]),
            ],
        ),
        (
            "email.mime.nonmultipart",
            vec![
                Part::python_module().deps(&["email.mime", "email.errors", "email.mime.base"]),
            ],
        ),
        (
            "email.mime.text",
            vec![
                Part::python_module()
                    .deps(&["email.mime", "email.charset", "email.mime.nonmultipart"]),
            ],
        ),
        (
            "email.parser",
            vec![
                Part::python_module()
                    .deps(&["email", "email.feedparser", "email._policybase", "io"]),
            ],
        ),
        (
            "email.policy",
            vec![
                Part::python_module()
                    .max_version((3, 5, 2))
                    .deps(&[
                        "email",
                        "email.contentmanager",
                        "email.headerregistry",
                        "email._policybase",
                        "email.utils",
                    ]),
                Part::python_module()
                    .min_version((3, 5, 3))
                    .max_version((3, 5))
                    .deps(&[
                        "email",
                        "email.contentmanager",
                        "email.headerregistry",
                        "email._policybase",
                        "email.utils",
                        "re",
                    ]),
                Part::python_module()
                    .min_version((3, 6))
                    .deps(&[
                        "email",
                        "email.contentmanager",
                        "email.headerregistry",
                        "email.message",
                        "email._policybase",
                        "email.utils",
                        "re",
                    ]),
            ],
        ),
        (
            "email.quoprimime",
            vec![
                Part::python_module().internal().deps(&["email", "re", "string"]),
            ],
        ),
        (
            "email.utils",
            vec![
                Part::python_module()
                    .deps(&[
                        "email",
                        "datetime",
                        "email.charset",
                        "email._parseaddr",
                        "os",
                        "random",
                        "re",
                        "socket",
                        "time",
                        "urllib.parse",
                    ]),
            ],
        ),
        (
            "encodings",
            vec![
                Part::python_module().version((3, 5)).deps(&["encodings.aliases", "codecs"]),
                Part::python_module()
                    .version((3, 6))
                    .deps(&["encodings.aliases", "_bootlocale", "codecs"]),
                Part::python_module()
                    .min_version((3, 7))
                    .deps(&["encodings.aliases", "codecs", "win#_winapi"]),
            ],
        ),
        ("encodings.aliases", vec![Part::core_python_module().internal().deps(&["encodings"])]),
        ("encodings.ascii", vec![Part::python_module().core().deps(&["encodings", "codecs"])]),
        (
            "encodings.base64_codec",
            vec![
                Part::python_module().deps(&["encodings", "codecs", "base64"]),
            ],
        ),
        (
            "encodings.big5",
            vec![
                Part::python_module()
                    .deps(&["encodings", "codecs", "_codecs_tw", "_multibytecodec"]),
            ],
        ),
        (
            "encodings.big5hkscs",
            vec![
                Part::python_module()
                    .deps(&["encodings", "codecs", "_codecs_hk", "_multibytecodec"]),
            ],
        ),
        ("encodings.bz2_codec", vec![Part::python_module().deps(&["encodings", "codecs", "bz2"])]),
        ("encodings.charmap", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.cp037", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.cp1006", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.cp1026", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.cp1125", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.cp1140", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.cp1250", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.cp1251", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.cp1252", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.cp1253", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.cp1254", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.cp1255", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.cp1256", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.cp1257", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.cp1258", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.cp273", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.cp424", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.cp437", vec![Part::python_module().core().deps(&["encodings", "codecs"])]),
        ("encodings.cp500", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.cp65001", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.cp720", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.cp737", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.cp775", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.cp850", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.cp852", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.cp855", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.cp856", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.cp857", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.cp858", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.cp860", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.cp861", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.cp862", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.cp863", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.cp864", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.cp865", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.cp866", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.cp869", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.cp874", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.cp875", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        (
            "encodings.cp932",
            vec![
                Part::python_module()
                    .deps(&["encodings", "codecs", "_codecs_jp", "_multibytecodec"]),
            ],
        ),
        (
            "encodings.cp949",
            vec![
                Part::python_module()
                    .deps(&["encodings", "codecs", "_codecs_kr", "_multibytecodec"]),
            ],
        ),
        (
            "encodings.cp950",
            vec![
                Part::python_module()
                    .deps(&["encodings", "codecs", "_codecs_tw", "_multibytecodec"]),
            ],
        ),
        (
            "encodings.euc_jis_2004",
            vec![
                Part::python_module()
                    .deps(&["encodings", "codecs", "_codecs_jp", "_multibytecodec"]),
            ],
        ),
        (
            "encodings.euc_jisx0213",
            vec![
                Part::python_module()
                    .deps(&["encodings", "codecs", "_codecs_jp", "_multibytecodec"]),
            ],
        ),
        (
            "encodings.euc_jp",
            vec![
                Part::python_module()
                    .deps(&["encodings", "codecs", "_codecs_jp", "_multibytecodec"]),
            ],
        ),
        (
            "encodings.euc_kr",
            vec![
                Part::python_module()
                    .deps(&["encodings", "codecs", "_codecs_kr", "_multibytecodec"]),
            ],
        ),
        (
            "encodings.gb18030",
            vec![
                Part::python_module()
                    .deps(&["encodings", "codecs", "_codecs_cn", "_multibytecodec"]),
            ],
        ),
        (
            "encodings.gb2312",
            vec![
                Part::python_module()
                    .deps(&["encodings", "codecs", "_codecs_cn", "_multibytecodec"]),
            ],
        ),
        (
            "encodings.gbk",
            vec![
                Part::python_module()
                    .deps(&["encodings", "codecs", "_codecs_cn", "_multibytecodec"]),
            ],
        ),
        (
            "encodings.hex_codec",
            vec![
                Part::python_module().deps(&["encodings", "codecs", "binascii"]),
            ],
        ),
        ("encodings.hp_roman8", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        (
            "encodings.hz",
            vec![
                Part::python_module()
                    .deps(&["encodings", "codecs", "_codecs_cn", "_multibytecodec"]),
            ],
        ),
        (
            "encodings.idna",
            vec![
                Part::python_module()
                    .deps(&["encodings", "codecs", "re", "stringprep", "unicodedata"]),
            ],
        ),
        (
            "encodings.iso2022_jp",
            vec![
                Part::python_module()
                    .deps(&["encodings", "codecs", "_codecs_iso2022", "_multibytecodec"]),
            ],
        ),
        (
            "encodings.iso2022_jp_1",
            vec![
                Part::python_module()
                    .deps(&["encodings", "codecs", "_codecs_iso2022", "_multibytecodec"]),
            ],
        ),
        (
            "encodings.iso2022_jp_2",
            vec![
                Part::python_module()
                    .deps(&["encodings", "codecs", "_codecs_iso2022", "_multibytecodec"]),
            ],
        ),
        (
            "encodings.iso2022_jp_2004",
            vec![
                Part::python_module()
                    .deps(&["encodings", "codecs", "_codecs_iso2022", "_multibytecodec"]),
            ],
        ),
        (
            "encodings.iso2022_jp_3",
            vec![
                Part::python_module()
                    .deps(&["encodings", "codecs", "_codecs_iso2022", "_multibytecodec"]),
            ],
        ),
        (
            "encodings.iso2022_jp_ext",
            vec![
                Part::python_module()
                    .deps(&["encodings", "codecs", "_codecs_iso2022", "_multibytecodec"]),
            ],
        ),
        (
            "encodings.iso2022_kr",
            vec![
                Part::python_module()
                    .deps(&["encodings", "codecs", "_codecs_iso2022", "_multibytecodec"]),
            ],
        ),
        ("encodings.iso8859_1", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.iso8859_10", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.iso8859_11", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.iso8859_13", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.iso8859_14", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.iso8859_15", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.iso8859_16", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.iso8859_2", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.iso8859_3", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.iso8859_4", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.iso8859_5", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.iso8859_6", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.iso8859_7", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.iso8859_8", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.iso8859_9", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        (
            "encodings.johab",
            vec![
                Part::python_module()
                    .deps(&["encodings", "codecs", "_codecs_kr", "_multibytecodec"]),
            ],
        ),
        ("encodings.koi8_r", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.koi8_t", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.koi8_u", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.kz1048", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.latin_1", vec![Part::python_module().core().deps(&["encodings", "codecs"])]),
        ("encodings.mac_arabic", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.mac_centeuro", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.mac_croatian", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.mac_cyrillic", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.mac_farsi", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.mac_greek", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.mac_iceland", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.mac_latin2", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.mac_roman", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.mac_romanian", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.mac_turkish", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        (
            "encodings.mbcs",
            vec![
                Part::python_module().target("win").core().deps(&["encodings", "codecs"]),
            ],
        ),
        (
            "encodings.oem",
            vec![
                Part::python_module()
                    .min_version((3, 6))
                    .target("win")
                    .deps(&["encodings", "codecs", "codecs"]),
            ],
        ),
        ("encodings.palmos", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.ptcp154", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.punycode", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        (
            "encodings.quopri_codec",
            vec![
                Part::python_module().deps(&["encodings", "codecs", "io", "quopri"]),
            ],
        ),
        (
            "encodings.raw_unicode_escape",
            vec![
                Part::python_module().deps(&["encodings", "codecs"]),
            ],
        ),
        ("encodings.rot_13", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        (
            "encodings.shift_jis",
            vec![
                Part::python_module()
                    .deps(&["encodings", "codecs", "_codecs_jp", "_multibytecodec"]),
            ],
        ),
        (
            "encodings.shift_jis_2004",
            vec![
                Part::python_module()
                    .deps(&["encodings", "codecs", "_codecs_jp", "_multibytecodec"]),
            ],
        ),
        (
            "encodings.shift_jisx0213",
            vec![
                Part::python_module()
                    .deps(&["encodings", "codecs", "_codecs_jp", "_multibytecodec"]),
            ],
        ),
        ("encodings.tis_620", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.undefined", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.unicode_escape", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.unicode_internal", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.utf_16", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.utf_16_be", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.utf_16_le", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.utf_32", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.utf_32_be", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.utf_32_le", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.utf_7", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        ("encodings.utf_8", vec![Part::python_module().core().deps(&["encodings", "codecs"])]),
        ("encodings.utf_8_sig", vec![Part::python_module().deps(&["encodings", "codecs"])]),
        (
            "encodings.uu_codec",
            vec![
                Part::python_module().deps(&["encodings", "codecs", "binascii", "io"]),
            ],
        ),
        (
            "encodings.zlib_codec",
            vec![
                Part::python_module().deps(&["encodings", "codecs", "zlib"]),
            ],
        ),
        (
            "enum",
            vec![
                Part::python_module().version((3, 5)).deps(&["collections", "types"]),
                Part::python_module()
                    .version((3, 6))
                    .deps(&["_collections", "functools", "operator", "types"]),
                Part::python_module().min_version((3, 7)).deps(&["_collections", "types"]),
            ],
        ),
        ("errno", vec![Part::core_extension_module()]),
        ("faulthandler", vec![Part::core_extension_module()]),
        ("fcntl", vec![Part::extension_module().target("!win").source(&["fcntlmodule.c"])]),
        ("filecmp", vec![Part::python_module().deps(&["itertools", "os", "stat"])]),
        ("fileinput", vec![Part::python_module().deps(&["os", "warnings"])]),
        ("fnmatch", vec![Part::python_module().deps(&["functools", "os", "posixpath", "re"])]),
        ("formatter", vec![Part::python_module().deps(&["warnings"])]),
        (
            "fractions",
            vec![
                Part::python_module()
                    .deps(&["decimal", "math", "numbers", "operator", "re", "warnings"]),
            ],
        ),
        (
            "ftplib",
            vec![
                Part::python_module()
                    .version((3, 5))
                    .deps(&["os", "re", "socket", "?ssl", "warnings"]),
                Part::python_module()
                    .min_version((3, 6))
                    .deps(&["re", "socket", "?ssl", "warnings"]),
            ],
        ),
        (
            "functools",
            vec![
                Part::python_module()
                    .version((3, 5))
                    .deps(&["abc", "collections", "_functools", "_thread", "types", "weakref"]),
                Part::python_module()
                    .min_version((3, 6))
                    .deps(&[
                        "abc",
                        "collections",
                        "_functools",
                        "reprlib",
                        "_thread",
                        "types",
                        "weakref",
                    ]),
            ],
        ),
        ("gc", vec![Part::core_extension_module()]),
        ("genericpath", vec![Part::python_module().internal().deps(&["os", "stat"])]),
        ("getopt", vec![Part::python_module().deps(&["gettext", "os"])]),
        (
            "getpass",
            vec![
                Part::python_module()
                    .deps(&[
                        "contextlib",
                        "io",
                        "win#msvcrt",
                        "os",
                        "!win#pwd",
                        "!win#termios",
                        "warnings",
                    ]),
            ],
        ),
        (
            "gettext",
            vec![
                Part::python_module()
                    .max_version((3, 5, 2))
                    .deps(&[
                        "copy",
                        "errno",
                        "io",
                        "locale",
                        "os",
                        "re",
                        "struct",
                        "token",
                        "tokenize",
                    ]),
                Part::python_module()
                    .min_version((3, 5, 3))
                    .max_version((3, 6))
                    .deps(&["copy", "errno", "io", "locale", "os", "re", "struct"]),
                Part::python_module()
                    .min_version((3, 7))
                    .deps(&["copy", "errno", "locale", "os", "re", "struct", "warnings"]),
            ],
        ),
        ("glob", vec![Part::python_module().deps(&["fnmatch", "os", "re"])]),
        (
            "grp",
            vec![
                Part::extension_module()
                    .target("!win")
                    .min_android_api(26)
                    .source(&["grpmodule.c"]),
            ],
        ),
        (
            "gzip",
            vec![
                Part::python_module()
                    .deps(&[
                        "_compression",
                        "errno",
                        "io",
                        "os",
                        "struct",
                        "time",
                        "warnings",
                        "zlib",
                    ]),
            ],
        ),
        (
            "hashlib",
            vec![
                Part::python_module()
                    .version((3, 5))
                    .deps(&["?_hashlib", "!_md5", "!_sha1", "!_sha256", "!_sha512"]),
                Part::python_module()
                    .min_version((3, 6))
                    .deps(&[
                        "?_hashlib",
                        "!_md5",
                        "!_sha1",
                        "!_sha256",
                        "!_sha512",
                        "_blake2",
                        "_sha3",
                    ]),
            ],
        ),
        ("heapq", vec![Part::python_module().deps(&["_heapq"])]),
        (
            "hmac",
            vec![
                Part::python_module()
                    .max_version((3, 6))
                    .deps(&["hashlib", "_operator", "warnings"]),
                Part::python_module()
                    .min_version((3, 7))
                    .deps(&["hashlib", "?_hashlib", "_operator", "warnings"]),
            ],
        ),
        ("html", vec![Part::python_module().deps(&["html.entities", "re"])]),
        ("html.entities", vec![Part::python_module().deps(&["html"])]),
        (
            "html.parser",
            vec![
                Part::python_module().deps(&["html", "_markupbase", "re", "warnings"]),
            ],
        ),
        ("http", vec![Part::python_module().deps(&["enum"])]),
        (
            "http.client",
            vec![
                Part::python_module()
                    .version((3, 5))
                    .deps(&[
                        "http",
                        "collections",
                        "email.message",
                        "email.parser",
                        "io",
                        "os",
                        "re",
                        "socket",
                        "?ssl",
                        "urllib.parse",
                    ]),
                Part::python_module()
                    .version((3, 6))
                    .deps(&[
                        "http",
                        "collections",
                        "email.message",
                        "email.parser",
                        "io",
                        "os",
                        "re",
                        "socket",
                        "?ssl",
                        "urllib.parse",
                        "warnings",
                    ]),
                Part::python_module()
                    .min_version((3, 7))
                    .deps(&[
                        "http",
                        "collections.abc",
                        "email.message",
                        "email.parser",
                        "io",
                        "re",
                        "socket",
                        "?ssl",
                        "urllib.parse",
                        "warnings",
                    ]),
            ],
        ),
        (
            "http.cookiejar",
            vec![
                Part::python_module()
                    .deps(&[
                        "http",
                        "calendar",
                        "copy",
                        "datetime",
                        "http.client",
                        "re",
                        "threading",
                        "time",
                        "urllib.parse",
                        "urllib.request",
                    ]),
            ],
        ),
        (
            "http.cookies",
            vec![
                Part::python_module()
                    .max_version((3, 6))
                    .deps(&["http", "re", "string", "time", "warnings"]),
                Part::python_module().min_version((3, 7)).deps(&["http", "re", "string", "time"]),
            ],
        ),
        (
            "http.server",
            vec![
                Part::python_module()
                    .version((3, 5))
                    .deps(&[
                        "http",
                        "argparse",
                        "base64",
                        "binascii",
                        "copy",
                        "html",
                        "http.client",
                        "io",
                        "mimetypes",
                        "os",
                        "posixpath",
                        "!win#pwd",
                        "select",
                        "shutil",
                        "socket",
                        "socketserver",
                        "subprocess",
                        "time",
                        "urllib.parse",
                    ]),
                Part::python_module()
                    .version((3, 6))
                    .deps(&[
                        "http",
                        "argparse",
                        "base64",
                        "binascii",
                        "copy",
                        "email.utils",
                        "html",
                        "http.client",
                        "io",
                        "mimetypes",
                        "os",
                        "posixpath",
                        "!win#pwd",
                        "select",
                        "shutil",
                        "socket",
                        "socketserver",
                        "subprocess",
                        "time",
                        "urllib.parse",
                    ]),
                Part::python_module()
                    .min_version((3, 7))
                    .deps(&[
                        "http",
                        "base64",
                        "binascii",
                        "copy",
                        "datetime",
                        "email.utils",
                        "functools",
                        "html",
                        "http.client",
                        "io",
                        "mimetypes",
                        "os",
                        "posixpath",
                        "!win#pwd",
                        "select",
                        "shutil",
                        "socket",
                        "socketserver",
                        "subprocess",
                        "time",
                        "urllib.parse",
                    ]),
            ],
        ),
        (
            "imaplib",
            vec![
                Part::python_module()
                    .version((3, 5))
                    .deps(&[
                        "binascii",
                        "calendar",
                        "datetime",
                        "errno",
                        "hmac",
                        "io",
                        "random",
                        "re",
                        "socket",
                        "?ssl",
                        "subprocess",
                        "time",
                    ]),
                Part::python_module()
                    .min_version((3, 6))
                    .deps(&[
                        "binascii",
                        "calendar",
                        "datetime",
                        "errno",
                        "hmac",
                        "io",
                        "random",
                        "re",
                        "socket",
                        "?ssl",
                        "subprocess",
                        "time",
                        "warnings",
                    ]),
            ],
        ),
        (
            "imghdr",
            vec![
                Part::python_module().version((3, 5)),
                Part::python_module().min_version((3, 6)).deps(&["os"]),
            ],
        ),
        (
            "imp",
            vec![
                Part::core_python_module()
                    .deps(&[
                        "_imp",
                        "importlib",
                        "importlib._bootstrap",
                        "importlib._bootstrap_external",
                        "importlib.machinery",
                        "importlib.util",
                        "os",
                        "tokenize",
                        "types",
                        "warnings",
                    ]),
            ],
        ),
        (
            "importlib",
            vec![
                Part::core_python_module()
                    .max_version((3, 6))
                    .deps(&[
                        "importlib._bootstrap",
                        "importlib._bootstrap_external",
                        "_imp",
                        "types",
                    ])
                    .hidden_deps(&["warnings"]),
                Part::core_python_module()
                    .min_version((3, 7))
                    .deps(&[
                        "importlib._bootstrap",
                        "importlib._bootstrap_external",
                        "_imp",
                        "types",
                    ])
                    .hidden_deps(&["warnings"]),
            ],
        ),
        (
            "importlib._bootstrap",
            vec![
                Part::core_python_module().internal().builtin().deps(&["importlib"]),
            ],
        ),
        (
            "importlib._bootstrap_external",
            vec![
                Part::core_python_module().internal().builtin().deps(&["importlib"]),
            ],
        ),
        (
            "importlib.abc",
            vec![
                Part::python_module()
                    .max_version((3, 6))
                    .deps(&[
                        "importlib",
                        "abc",
                        "importlib._bootstrap",
                        "importlib._bootstrap_external",
                        "importlib.machinery",
                    ]),
                Part::python_module()
                    .min_version((3, 7))
                    .deps(&[
                        "importlib",
                        "abc",
                        "importlib._bootstrap",
                        "importlib._bootstrap_external",
                        "importlib.machinery",
                        "warnings",
                    ]),
            ],
        ),
        (
            "importlib.machinery",
            vec![
                Part::python_module()
                    .deps(&[
                        "importlib",
                        "_imp",
                        "importlib._bootstrap",
                        "importlib._bootstrap_external",
                    ]),
            ],
        ),
        (
            "importlib.resources",
            vec![
                Part::python_module()
                    .min_version((3, 7))
                    .deps(&[
                        "importlib",
                        "contextlib",
                        "importlib.abc",
                        "io",
                        "pathlib",
                        "os",
                        "tempfile",
                        "types",
                        "typing",
                        "zipimport",
                    ]),
            ],
        ),
        (
            "importlib.util",
            vec![
                Part::python_module()
                    .max_version((3, 6))
                    .deps(&[
                        "importlib",
                        "contextlib",
                        "functools",
                        "importlib.abc",
                        "importlib._bootstrap",
                        "importlib._bootstrap_external",
                        "types",
                        "warnings",
                    ]),
                Part::python_module()
                    .min_version((3, 7))
                    .deps(&[
                        "importlib",
                        "contextlib",
                        "functools",
                        "_imp",
                        "importlib.abc",
                        "importlib._bootstrap",
                        "importlib._bootstrap_external",
                        "types",
                        "warnings",
                    ]),
            ],
        ),
        (
            "inspect",
            vec![
                Part::python_module()
                    .version((3, 5))
                    .deps(&[
                        "ast",
                        "collections",
                        "collections.abc",
                        "dis",
                        "enum",
                        "functools",
                        "imp",
                        "importlib.machinery",
                        "itertools",
                        "linecache",
                        "operator",
                        "os",
                        "re",
                        "token",
                        "tokenize",
                        "types",
                        "warnings",
                    ]),
                Part::python_module()
                    .min_version((3, 6))
                    .max_version((3, 6, 1))
                    .deps(&[
                        "ast",
                        "collections",
                        "collections.abc",
                        "dis",
                        "enum",
                        "functools",
                        "importlib.machinery",
                        "itertools",
                        "linecache",
                        "operator",
                        "os",
                        "re",
                        "token",
                        "tokenize",
                        "types",
                        "warnings",
                    ]),
                Part::python_module()
                    .min_version((3, 6, 2))
                    .deps(&[
                        "abc",
                        "ast",
                        "collections",
                        "collections.abc",
                        "dis",
                        "enum",
                        "functools",
                        "importlib.machinery",
                        "itertools",
                        "linecache",
                        "operator",
                        "os",
                        "re",
                        "token",
                        "tokenize",
                        "types",
                        "warnings",
                    ]),
            ],
        ),
        ("io", vec![Part::core_python_module().deps(&["abc", "_io"])]),
        ("ipaddress", vec![Part::python_module().deps(&["functools"])]),
        ("itertools", vec![Part::core_extension_module()]),
        (
            "json",
            vec![
                Part::python_module().version((3, 5)).deps(&["json.decoder", "json.encoder"]),
                Part::python_module()
                    .min_version((3, 6))
                    .deps(&["codecs", "json.decoder", "json.encoder"]),
            ],
        ),
        (
            "json.decoder",
            vec![
                Part::python_module().internal().deps(&["json", "json.scanner", "_json", "re"]),
            ],
        ),
        ("json.encoder", vec![Part::python_module().internal().deps(&["json", "_json", "re"])]),
        ("json.scanner", vec![Part::python_module().internal().deps(&["_json", "re"])]),
        ("keyword", vec![Part::python_module()]),
        ("linecache", vec![Part::python_module().deps(&["functools", "os", "tokenize"])]),
        (
            "locale",
            vec![
                Part::python_module()
                    .max_version((3, 6))
                    .deps(&[
                        "_bootlocale",
                        "collections",
                        "encodings",
                        "encodings.aliases",
                        "functools",
                        "_locale",
                        "os",
                        "re",
                    ]),
                Part::python_module()
                    .min_version((3, 7))
                    .deps(&[
                        "_bootlocale",
                        "_collections_abc",
                        "encodings",
                        "encodings.aliases",
                        "functools",
                        "_locale",
                        "os",
                        "re",
                    ]),
            ],
        ),
        (
            "logging",
            vec![
                Part::python_module()
                    .max_version((3, 6))
                    .deps(&[
                        "atexit",
                        "collections",
                        "io",
                        "os",
                        "string",
                        "threading",
                        "time",
                        "traceback",
                        "warnings",
                        "weakref",
                    ]),
                Part::python_module()
                    .min_version((3, 7))
                    .deps(&[
                        "atexit",
                        "collections.abc",
                        "io",
                        "os",
                        "pickle",
                        "string",
                        "threading",
                        "time",
                        "traceback",
                        "warnings",
                        "weakref",
                    ]),
            ],
        ),
        (
            "logging.config",
            vec![
                Part::python_module()
                    .max_version((3, 6))
                    .deps(&[
                        "logging",
                        "errno",
                        "configparser",
                        "io",
                        "json",
                        "logging.handlers",
                        "re",
                        "select",
                        "socketserver",
                        "struct",
                        "_thread",
                        "threading",
                        "traceback",
                    ]),
                Part::python_module()
                    .min_version((3, 7))
                    .deps(&[
                        "logging",
                        "errno",
                        "configparser",
                        "io",
                        "json",
                        "logging.handlers",
                        "re",
                        "select",
                        "socketserver",
                        "struct",
                        "threading",
                        "traceback",
                    ]),
            ],
        ),
        (
            "logging.handlers",
            vec![
                Part::python_module()
                    .version((3, 5, 0))
                    .deps(&[
                        "logging",
                        "base64",
                        "codecs",
                        "email.utils",
                        "errno",
                        "http.client",
                        "os",
                        "pickle",
                        "queue",
                        "re",
                        "socket",
                        "smtplib",
                        "stat",
                        "struct",
                        "threading",
                        "time",
                        "urllib.parse",
                    ]),
                Part::python_module()
                    .min_version((3, 5, 1))
                    .max_version((3, 7, 3))
                    .deps(&[
                        "logging",
                        "base64",
                        "codecs",
                        "email.message",
                        "email.utils",
                        "errno",
                        "http.client",
                        "os",
                        "pickle",
                        "queue",
                        "re",
                        "socket",
                        "smtplib",
                        "stat",
                        "struct",
                        "threading",
                        "time",
                        "urllib.parse",
                    ]),
                Part::python_module()
                    .min_version((3, 7, 4))
                    .deps(&[
                        "logging",
                        "base64",
                        "codecs",
                        "copy",
                        "email.message",
                        "email.utils",
                        "errno",
                        "http.client",
                        "os",
                        "pickle",
                        "queue",
                        "re",
                        "socket",
                        "smtplib",
                        "stat",
                        "struct",
                        "threading",
                        "time",
                        "urllib.parse",
                    ]),
            ],
        ),
        (
            "lzma",
            vec![
                Part::python_module().version((3, 5)).deps(&["_compression", "io", "_lzma"]),
                Part::python_module()
                    .min_version((3, 6))
                    .deps(&["_compression", "io", "_lzma", "os"]),
            ],
        ),
        (
            "macpath",
            vec![
                Part::python_module().max_version((3, 6)).deps(&["genericpath", "os", "stat"]),
                Part::python_module()
                    .min_version((3, 7))
                    .deps(&["genericpath", "os", "stat", "warnings"]),
            ],
        ),
        (
            "mailbox",
            vec![
                Part::python_module()
                    .deps(&[
                        "calendar",
                        "contextlib",
                        "copy",
                        "email",
                        "email.generator",
                        "email.message",
                        "errno",
                        "!win#fcntl",
                        "io",
                        "os",
                        "socket",
                        "time",
                        "warnings",
                    ]),
            ],
        ),
        (
            "mailcap",
            vec![
                Part::python_module().max_version((3, 5, 2)).deps(&["os"]),
                Part::python_module().min_version((3, 5, 3)).deps(&["os", "warnings"]),
            ],
        ),
        ("marshal", vec![Part::core_extension_module()]),
        (
            "math",
            vec![
                Part::extension_module().libs(&["linux#-lm"]).source(&["mathmodule.c", "_math.c"]),
            ],
        ),
        (
            "mimetypes",
            vec![
                Part::python_module().deps(&["os", "posixpath", "urllib.parse", "win#winreg"]),
            ],
        ),
        ("mmap", vec![Part::core_extension_module()]),
        (
            "modulefinder",
            vec![
                Part::python_module()
                    .max_version((3, 6))
                    .deps(&[
                        "dis",
                        "importlib._bootstrap_external",
                        "importlib.machinery",
                        "marshal",
                        "os",
                        "types",
                        "struct",
                        "warnings",
                    ]),
                Part::python_module()
                    .min_version((3, 7))
                    .deps(&[
                        "dis",
                        "importlib._bootstrap_external",
                        "importlib.machinery",
                        "marshal",
                        "os",
                        "types",
                        "warnings",
                    ]),
            ],
        ),
        (
            "msilib",
            vec![
                Part::python_module()
                    .max_version((3, 5, 1))
                    .target("win")
                    .deps(&["_msi", "os", "re", "string", "tempfile"]),
                Part::python_module()
                    .min_version((3, 5, 2))
                    .max_version((3, 5))
                    .target("win")
                    .deps(&["_msi", "glob", "os", "re", "string", "tempfile"]),
                Part::python_module()
                    .min_version((3, 6))
                    .target("win")
                    .deps(&["_msi", "fnmatch", "os", "re", "string", "tempfile"]),
            ],
        ),
        ("msvcrt", vec![Part::core_extension_module().target("win")]),
        ("multiprocessing", vec![Part::python_module().deps(&["multiprocessing.context"])]),
        (
            "multiprocessing.connection",
            vec![
                Part::python_module()
                    .version((3, 5))
                    .deps(&[
                        "multiprocessing",
                        "hmac",
                        "io",
                        "itertools",
                        "_multiprocessing",
                        "multiprocessing.reduction",
                        "multiprocessing.resource_sharer",
                        "multiprocessing.util",
                        "os",
                        "selectors",
                        "socket",
                        "struct",
                        "tempfile",
                        "time",
                        "win#_winapi",
                        "xmlrpc.client",
                    ]),
                Part::python_module()
                    .min_version((3, 6))
                    .deps(&[
                        "multiprocessing",
                        "hmac",
                        "io",
                        "itertools",
                        "_multiprocessing",
                        "multiprocessing.context",
                        "multiprocessing.resource_sharer",
                        "multiprocessing.util",
                        "os",
                        "selectors",
                        "socket",
                        "struct",
                        "tempfile",
                        "time",
                        "win#_winapi",
                        "xmlrpc.client",
                    ]),
            ],
        ),
        (
            "multiprocessing.context",
            vec![
                Part::python_module()
                    .version((3, 5))
                    .internal()
                    .deps(&[
                        "multiprocessing",
                        "multiprocessing.connection",
                        "!win#multiprocessing.forkserver",
                        "multiprocessing.managers",
                        "multiprocessing.pool",
                        "!win#multiprocessing.popen_fork",
                        "!win#multiprocessing.popen_forkserver",
                        "!win#multiprocessing.popen_spawn_posix",
                        "win#multiprocessing.popen_spawn_win32",
                        "multiprocessing.process",
                        "multiprocessing.queues",
                        "multiprocessing.sharedctypes",
                        "multiprocessing.spawn",
                        "multiprocessing.synchronize",
                        "multiprocessing.util",
                        "os",
                        "threading",
                    ]),
                Part::python_module()
                    .min_version((3, 6))
                    .internal()
                    .deps(&[
                        "multiprocessing",
                        "multiprocessing.connection",
                        "!win#multiprocessing.forkserver",
                        "multiprocessing.managers",
                        "multiprocessing.pool",
                        "!win#multiprocessing.popen_fork",
                        "!win#multiprocessing.popen_forkserver",
                        "!win#multiprocessing.popen_spawn_posix",
                        "win#multiprocessing.popen_spawn_win32",
                        "multiprocessing.process",
                        "multiprocessing.queues",
                        "multiprocessing.reduction",
                        "multiprocessing.sharedctypes",
                        "multiprocessing.spawn",
                        "multiprocessing.synchronize",
                        "multiprocessing.util",
                        "os",
                        "threading",
                    ]),
            ],
        ),
        (
            "multiprocessing.dummy",
            vec![
                Part::python_module()
                    .deps(&[
                        "multiprocessing",
                        "array",
                        "multiprocessing.dummy.connection",
                        "multiprocessing.pool",
                        "queue",
                        "threading",
                        "weakref",
                    ]),
            ],
        ),
        (
            "multiprocessing.dummy.connection",
            vec![
                Part::python_module().internal().deps(&["multiprocessing.dummy", "queue"]),
            ],
        ),
        (
            "multiprocessing.forkserver",
            vec![
                Part::python_module()
                    .version((3, 5))
                    .target("!win")
                    .internal()
                    .deps(&[
                        "multiprocessing",
                        "errno",
                        "multiprocessing.connection",
                        "multiprocessing.process",
                        "multiprocessing.reduction",
                        "multiprocessing.semaphore_tracker",
                        "multiprocessing.spawn",
                        "multiprocessing.util",
                        "os",
                        "selectors",
                        "signal",
                        "socket",
                        "struct",
                        "threading",
                    ]),
                Part::python_module()
                    .version((3, 6))
                    .target("!win")
                    .internal()
                    .deps(&[
                        "multiprocessing",
                        "errno",
                        "multiprocessing.connection",
                        "multiprocessing.context",
                        "multiprocessing.process",
                        "multiprocessing.semaphore_tracker",
                        "multiprocessing.spawn",
                        "multiprocessing.util",
                        "os",
                        "selectors",
                        "signal",
                        "socket",
                        "struct",
                        "threading",
                    ]),
                Part::python_module()
                    .min_version((3, 7))
                    .target("!win")
                    .internal()
                    .deps(&[
                        "multiprocessing",
                        "errno",
                        "multiprocessing.connection",
                        "multiprocessing.context",
                        "multiprocessing.process",
                        "multiprocessing.semaphore_tracker",
                        "multiprocessing.spawn",
                        "multiprocessing.util",
                        "os",
                        "selectors",
                        "signal",
                        "socket",
                        "struct",
                        "threading",
                        "warnings",
                    ]),
            ],
        ),
        (
            "multiprocessing.heap",
            vec![
                Part::python_module()
                    .version((3, 5))
                    .internal()
                    .deps(&[
                        "multiprocessing",
                        "bisect",
                        "multiprocessing.context",
                        "multiprocessing.reduction",
                        "multiprocessing.util",
                        "mmap",
                        "tempfile",
                        "os",
                        "threading",
                        "win#_winapi",
                    ]),
                Part::python_module()
                    .min_version((3, 6))
                    .internal()
                    .deps(&[
                        "multiprocessing",
                        "bisect",
                        "multiprocessing.context",
                        "multiprocessing.util",
                        "mmap",
                        "tempfile",
                        "os",
                        "threading",
                        "win#_winapi",
                    ]),
            ],
        ),
        (
            "multiprocessing.managers",
            vec![
                Part::python_module()
                    .version((3, 5))
                    .deps(&[
                        "multiprocessing",
                        "array",
                        "multiprocessing.connection",
                        "multiprocessing.context",
                        "multiprocessing.pool",
                        "multiprocessing.process",
                        "multiprocessing.reduction",
                        "multiprocessing.util",
                        "queue",
                        "threading",
                        "time",
                        "traceback",
                    ]),
                Part::python_module()
                    .min_version((3, 6))
                    .deps(&[
                        "multiprocessing",
                        "array",
                        "multiprocessing.connection",
                        "multiprocessing.context",
                        "multiprocessing.pool",
                        "multiprocessing.process",
                        "multiprocessing.util",
                        "queue",
                        "threading",
                        "time",
                        "traceback",
                    ]),
            ],
        ),
        (
            "multiprocessing.pool",
            vec![
                Part::python_module()
                    .deps(&[
                        "multiprocessing",
                        "collections",
                        "itertools",
                        "multiprocessing.dummy",
                        "multiprocessing.util",
                        "queue",
                        "threading",
                        "time",
                        "traceback",
                    ]),
            ],
        ),
        (
            "multiprocessing.popen_fork",
            vec![
                Part::python_module()
                    .target("!win")
                    .internal()
                    .deps(&[
                        "multiprocessing",
                        "multiprocessing.connection",
                        "multiprocessing.util",
                        "os",
                        "signal",
                    ]),
            ],
        ),
        (
            "multiprocessing.popen_forkserver",
            vec![
                Part::python_module()
                    .version((3, 5))
                    .target("!win")
                    .internal()
                    .deps(&[
                        "multiprocessing",
                        "io",
                        "multiprocessing.connection",
                        "multiprocessing.context",
                        "multiprocessing.forkserver",
                        "multiprocessing.popen_fork",
                        "multiprocessing.reduction",
                        "multiprocessing.spawn",
                        "multiprocessing.util",
                        "os",
                    ]),
                Part::python_module()
                    .min_version((3, 6))
                    .target("!win")
                    .internal()
                    .deps(&[
                        "multiprocessing",
                        "io",
                        "multiprocessing.connection",
                        "multiprocessing.context",
                        "multiprocessing.forkserver",
                        "multiprocessing.popen_fork",
                        "multiprocessing.spawn",
                        "multiprocessing.util",
                        "os",
                    ]),
            ],
        ),
        (
            "multiprocessing.popen_spawn_posix",
            vec![
                Part::python_module()
                    .version((3, 5))
                    .target("!win")
                    .internal()
                    .deps(&[
                        "multiprocessing",
                        "io",
                        "multiprocessing.context",
                        "multiprocessing.popen_fork",
                        "multiprocessing.reduction",
                        "multiprocessing.semaphore_tracker",
                        "multiprocessing.spawn",
                        "multiprocessing.util",
                        "os",
                    ]),
                Part::python_module()
                    .min_version((3, 6))
                    .target("!win")
                    .internal()
                    .deps(&[
                        "multiprocessing",
                        "io",
                        "multiprocessing.context",
                        "multiprocessing.popen_fork",
                        "multiprocessing.semaphore_tracker",
                        "multiprocessing.spawn",
                        "multiprocessing.util",
                        "os",
                    ]),
            ],
        ),
        (
            "multiprocessing.popen_spawn_win32",
            vec![
                Part::python_module()
                    .version((3, 5))
                    .target("win")
                    .internal()
                    .deps(&[
                        "multiprocessing",
                        "msvcrt",
                        "multiprocessing.context",
                        "multiprocessing.reduction",
                        "multiprocessing.spawn",
                        "multiprocessing.util",
                        "os",
                        "signal",
                        "_winapi",
                    ]),
                Part::python_module()
                    .min_version((3, 6))
                    .target("win")
                    .internal()
                    .deps(&[
                        "multiprocessing",
                        "msvcrt",
                        "multiprocessing.context",
                        "multiprocessing.spawn",
                        "multiprocessing.util",
                        "os",
                        "signal",
                        "_winapi",
                    ]),
            ],
        ),
        (
            "multiprocessing.process",
            vec![
                Part::python_module()
                    .max_version((3, 6))
                    .internal()
                    .deps(&[
                        "multiprocessing",
                        "itertools",
                        "multiprocessing.context",
                        "multiprocessing.util",
                        "os",
                        "signal",
                        "traceback",
                        "_weakrefset",
                    ]),
                Part::python_module()
                    .min_version((3, 7))
                    .internal()
                    .deps(&[
                        "multiprocessing",
                        "itertools",
                        "multiprocessing.context",
                        "multiprocessing.util",
                        "os",
                        "signal",
                        "threading",
                        "traceback",
                        "_weakrefset",
                    ]),
            ],
        ),
        (
            "multiprocessing.queues",
            vec![
                Part::python_module()
                    .version((3, 5))
                    .internal()
                    .deps(&[
                        "multiprocessing",
                        "collections",
                        "errno",
                        "_multiprocessing",
                        "multiprocessing.connection",
                        "multiprocessing.context",
                        "multiprocessing.reduction",
                        "multiprocessing.synchronize",
                        "multiprocessing.util",
                        "os",
                        "queue",
                        "threading",
                        "time",
                        "traceback",
                        "weakref",
                    ]),
                Part::python_module()
                    .min_version((3, 6))
                    .internal()
                    .deps(&[
                        "multiprocessing",
                        "collections",
                        "errno",
                        "_multiprocessing",
                        "multiprocessing.connection",
                        "multiprocessing.context",
                        "multiprocessing.synchronize",
                        "multiprocessing.util",
                        "os",
                        "queue",
                        "threading",
                        "time",
                        "traceback",
                        "weakref",
                    ]),
            ],
        ),
        (
            "multiprocessing.reduction",
            vec![
                Part::python_module()
                    .version((3, 5))
                    .internal()
                    .deps(&[
                        "multiprocessing",
                        "array",
                        "copyreg",
                        "functools",
                        "io",
                        "multiprocessing.context",
                        "multiprocessing.resource_sharer",
                        "os",
                        "pickle",
                        "socket",
                        "win#_winapi",
                    ]),
                Part::python_module()
                    .min_version((3, 6))
                    .target("win")
                    .internal()
                    .deps(&[
                        "multiprocessing",
                        "abc",
                        "array",
                        "copyreg",
                        "functools",
                        "io",
                        "multiprocessing.context",
                        "multiprocessing.resource_sharer",
                        "os",
                        "pickle",
                        "socket",
                        "win#_winapi",
                    ]),
            ],
        ),
        (
            "multiprocessing.resource_sharer",
            vec![
                Part::python_module()
                    .version((3, 5))
                    .internal()
                    .deps(&[
                        "multiprocessing",
                        "multiprocessing.connection",
                        "multiprocessing.process",
                        "multiprocessing.reduction",
                        "multiprocessing.util",
                        "os",
                        "signal",
                        "socket",
                        "threading",
                    ]),
                Part::python_module()
                    .min_version((3, 6))
                    .internal()
                    .deps(&[
                        "multiprocessing",
                        "multiprocessing.connection",
                        "multiprocessing.context",
                        "multiprocessing.process",
                        "multiprocessing.util",
                        "os",
                        "signal",
                        "socket",
                        "threading",
                    ]),
            ],
        ),
        (
            "multiprocessing.semaphore_tracker",
            vec![
                Part::python_module()
                    .target("!win")
                    .internal()
                    .deps(&[
                        "multiprocessing",
                        "_multiprocessing",
                        "multiprocessing.spawn",
                        "multiprocessing.util",
                        "os",
                        "signal",
                        "threading",
                        "warnings",
                    ]),
            ],
        ),
        (
            "multiprocessing.sharedctypes",
            vec![
                Part::python_module()
                    .version((3, 5))
                    .deps(&[
                        "multiprocessing",
                        "ctypes",
                        "multiprocessing.context",
                        "multiprocessing.heap",
                        "multiprocessing.reduction",
                        "weakref",
                    ]),
                Part::python_module()
                    .min_version((3, 6))
                    .deps(&[
                        "multiprocessing",
                        "ctypes",
                        "multiprocessing.context",
                        "multiprocessing.heap",
                        "weakref",
                    ]),
            ],
        ),
        (
            "multiprocessing.spawn",
            vec![
                Part::python_module()
                    .version((3, 5))
                    .internal()
                    .deps(&[
                        "multiprocessing",
                        "win#msvcrt",
                        "multiprocessing.process",
                        "multiprocessing.reduction",
                        "multiprocessing.util",
                        "os",
                        "pickle",
                        "runpy",
                        "types",
                    ]),
                Part::python_module()
                    .min_version((3, 6))
                    .internal()
                    .deps(&[
                        "multiprocessing",
                        "win#msvcrt",
                        "multiprocessing.context",
                        "multiprocessing.process",
                        "multiprocessing.util",
                        "os",
                        "runpy",
                        "types",
                    ]),
            ],
        ),
        (
            "multiprocessing.synchronize",
            vec![
                Part::python_module()
                    .internal()
                    .deps(&[
                        "multiprocessing",
                        "_multiprocessing",
                        "multiprocessing.context",
                        "multiprocessing.heap",
                        "multiprocessing.process",
                        "!win#multiprocessing.semaphore_tracker",
                        "multiprocessing.util",
                        "struct",
                        "threading",
                        "time",
                        "tempfile",
                    ]),
            ],
        ),
        (
            "multiprocessing.util",
            vec![
                Part::python_module()
                    .internal()
                    .deps(&[
                        "multiprocessing",
                        "atexit",
                        "itertools",
                        "logging",
                        "multiprocessing.process",
                        "os",
                        "!win#_posixsubprocess",
                        "shutil",
                        "subprocess",
                        "tempfile",
                        "threading",
                        "traceback",
                        "weakref",
                    ]),
            ],
        ),
        ("netrc", vec![Part::python_module().deps(&["os", "!win#pwd", "shlex", "stat"])]),
        (
            "nis",
            vec![
                Part::extension_module()
                    .target("!win")
                    .libs(&["linux#-lnsl"])
                    .source(&["nismodule.c"]),
            ],
        ),
        (
            "nntplib",
            vec![
                Part::python_module()
                    .deps(&[
                        "collections",
                        "datetime",
                        "email.header",
                        "netrc",
                        "re",
                        "socket",
                        "?ssl",
                        "warnings",
                    ]),
            ],
        ),
        ("nt", vec![Part::core_extension_module().target("win").internal()]),
        (
            "ntpath",
            vec![
                Part::python_module()
                    .max_version((3, 6))
                    .internal()
                    .deps(&["genericpath", "win#nt", "os", "stat", "string", "warnings"]),
                Part::python_module()
                    .min_version((3, 7))
                    .internal()
                    .deps(&["genericpath", "win#nt", "os", "stat", "string"]),
            ],
        ),
        (
            "nturl2path",
            vec![
                Part::python_module().target("win").internal().deps(&["string", "urllib.parse"]),
            ],
        ),
        ("numbers", vec![Part::python_module().deps(&["abc"])]),
        ("opcode", vec![Part::python_module().internal().deps(&["_opcode"])]),
        ("operator", vec![Part::python_module().deps(&["functools", "_operator"])]),
        ("optparse", vec![Part::python_module().deps(&["gettext", "os", "textwrap"])]),
        (
            "os",
            vec![
                Part::python_module()
                    .version((3, 5))
                    .deps(&[
                        "_collections_abc",
                        "errno",
                        "io",
                        "win#nt",
                        "win#ntpath",
                        "!win#posix",
                        "!win#posixpath",
                        "stat",
                        "subprocess",
                        "warnings",
                    ]),
                Part::python_module()
                    .version((3, 6))
                    .deps(&[
                        "abc",
                        "_collections_abc",
                        "errno",
                        "io",
                        "win#nt",
                        "win#ntpath",
                        "!win#posix",
                        "!win#posixpath",
                        "stat",
                        "subprocess",
                        "warnings",
                    ]),
                Part::python_module()
                    .version((3, 7))
                    .deps(&[
                        "abc",
                        "_collections_abc",
                        "io",
                        "win#nt",
                        "win#ntpath",
                        "!win#posix",
                        "!win#posixpath",
                        "stat",
                        "subprocess",
                        "warnings",
                    ]),
            ],
        ),
        ("ossaudiodev", vec![Part::extension_module().source(&["ossaudiodev.c"])]),
        ("parser", vec![Part::extension_module().source(&["parsermodule.c"])]),
        (
            "pathlib",
            vec![
                Part::python_module()
                    .max_version((3, 6))
                    .deps(&[
                        "collections",
                        "contextlib",
                        "errno",
                        "fnmatch",
                        "functools",
                        "!win#grp",
                        "io",
                        "win#nt",
                        "ntpath",
                        "operator",
                        "os",
                        "posixpath",
                        "!win#pwd",
                        "re",
                        "stat",
                        "urllib.parse",
                    ]),
                Part::python_module()
                    .min_version((3, 7))
                    .deps(&[
                        "_collections_abc",
                        "errno",
                        "fnmatch",
                        "functools",
                        "!win#grp",
                        "io",
                        "win#nt",
                        "ntpath",
                        "operator",
                        "os",
                        "posixpath",
                        "!win#pwd",
                        "re",
                        "stat",
                        "urllib.parse",
                    ]),
            ],
        ),
        (
            "pdb",
            vec![
                Part::python_module()
                    .max_version((3, 6))
                    .deps(&[
                        "bdb",
                        "cmd",
                        "code",
                        "dis",
                        "glob",
                        "inspect",
                        "linecache",
                        "os",
                        "pprint",
                        "pydoc",
                        "re",
                        "shlex",
                        "signal",
                        "traceback",
                    ]),
                Part::python_module()
                    .min_version((3, 7))
                    .deps(&[
                        "bdb",
                        "cmd",
                        "code",
                        "dis",
                        "glob",
                        "inspect",
                        "linecache",
                        "os",
                        "pprint",
                        "pydoc",
                        "re",
                        "runpy",
                        "shlex",
                        "signal",
                        "traceback",
                    ]),
            ],
        ),
        (
            "pickle",
            vec![
                Part::python_module()
                    .version((3, 5))
                    .deps(&[
                        "codecs",
                        "_compat_pickle",
                        "copyreg",
                        "io",
                        "itertools",
                        "marshal",
                        "_pickle",
                        "re",
                        "struct",
                        "types",
                    ]),
                Part::python_module()
                    .min_version((3, 6))
                    .deps(&[
                        "codecs",
                        "_compat_pickle",
                        "copyreg",
                        "functools",
                        "io",
                        "itertools",
                        "marshal",
                        "_pickle",
                        "re",
                        "struct",
                        "types",
                    ]),
            ],
        ),
        (
            "pickletools",
            vec![
                Part::python_module().deps(&["codecs", "io", "pickle", "re", "struct"]),
            ],
        ),
        (
            "pipes",
            vec![
                Part::python_module().target("!win").deps(&["os", "re", "shlex", "tempfile"]),
            ],
        ),
        (
            "pkgutil",
            vec![
                Part::python_module()
                    .version((3, 5))
                    .deps(&[
                        "functools",
                        "importlib",
                        "importlib.machinery",
                        "importlib.util",
                        "inspect",
                        "marshal",
                        "os",
                        "types",
                        "warnings",
                    ]),
                Part::python_module()
                    .min_version((3, 6))
                    .deps(&[
                        "collections",
                        "functools",
                        "importlib",
                        "importlib.machinery",
                        "importlib.util",
                        "inspect",
                        "marshal",
                        "os",
                        "types",
                        "warnings",
                    ]),
            ],
        ),
        (
            "platform",
            vec![
                Part::python_module()
                    .version((3, 5, 0))
                    .deps(&[
                        "collections",
                        "os",
                        "plistlib",
                        "re",
                        "socket",
                        "struct",
                        "subprocess",
                        "warnings",
                        "win#winreg",
                    ]),
                Part::python_module()
                    .min_version((3, 5, 1))
                    .max_version((3, 5, 2))
                    .deps(&[
                        "collections",
                        "win#ctypes",
                        "win#ctypes.wintypes",
                        "os",
                        "plistlib",
                        "re",
                        "socket",
                        "struct",
                        "subprocess",
                        "warnings",
                        "win#winreg",
                    ]),
                Part::python_module()
                    .min_version((3, 5, 3))
                    .deps(&[
                        "collections",
                        "os",
                        "plistlib",
                        "re",
                        "socket",
                        "struct",
                        "subprocess",
                        "warnings",
                        "win#winreg",
                    ]),
            ],
        ),
        (
            "plistlib",
            vec![
                Part::python_module()
                    .deps(&[
                        "binascii",
                        "codecs",
                        "contextlib",
                        "datetime",
                        "enum",
                        "io",
                        "itertools",
                        "os",
                        "re",
                        "struct",
                        "warnings",
                        "xml.parsers.expat",
                    ]),
            ],
        ),
        (
            "poplib",
            vec![
                Part::python_module()
                    .version((3, 5))
                    .deps(&["errno", "hashlib", "re", "socket", "?ssl"]),
                Part::python_module()
                    .min_version((3, 6))
                    .deps(&["errno", "hashlib", "re", "socket", "?ssl", "warnings"]),
            ],
        ),
        ("posix", vec![Part::core_extension_module().target("!win")]),
        (
            "posixpath",
            vec![
                Part::python_module()
                    .internal()
                    .deps(&["genericpath", "os", "!win#pwd", "re", "stat", "warnings"]),
            ],
        ),
        ("pprint", vec![Part::python_module().deps(&["collections", "io", "re", "time", "types"])]),
        (
            "profile",
            vec![
                Part::python_module()
                    .max_version((3, 6))
                    .deps(&["marshal", "optparse", "os", "pstats", "time"]),
                Part::python_module().min_version((3, 7)).deps(&["marshal", "pstats", "time"]),
            ],
        ),
        (
            "pstats",
            vec![
                Part::python_module()
                    .max_version((3, 6))
                    .deps(&["functools", "marshal", "os", "re", "time"]),
                Part::python_module()
                    .min_version((3, 7))
                    .deps(&["enum", "functools", "marshal", "os", "re", "time"]),
            ],
        ),
        ("pty", vec![Part::python_module().target("!win").deps(&["fcntl", "os", "select", "tty"])]),
        ("pwd", vec![Part::core_extension_module().target("!win")]),
        (
            "py_compile",
            vec![
                Part::python_module()
                    .max_version((3, 6))
                    .deps(&[
                        "importlib._bootstrap_external",
                        "importlib.machinery",
                        "importlib.util",
                        "os",
                        "traceback",
                    ]),
                Part::python_module()
                    .min_version((3, 7))
                    .deps(&[
                        "enum",
                        "importlib._bootstrap_external",
                        "importlib.machinery",
                        "importlib.util",
                        "os",
                        "traceback",
                    ]),
            ],
        ),
        (
            "pyclbr",
            vec![
                Part::python_module()
                    .version((3, 5))
                    .deps(&["importlib.util", "io", "operator", "os", "token", "tokenize"]),
                Part::python_module()
                    .min_version((3, 6))
                    .deps(&["importlib.util", "io", "token", "tokenize"]),
            ],
        ),
        (
            "pydoc",
            vec![
                Part::python_module()
                    .max_version((3, 7, 6))
                    .deps(&[
                        "collections",
                        "email.message",
                        "http.server",
                        "importlib._bootstrap",
                        "importlib._bootstrap_external",
                        "importlib.machinery",
                        "importlib.util",
                        "inspect",
                        "io",
                        "os",
                        "pkgutil",
                        "platform",
                        "re",
                        "reprlib",
                        "select",
                        "subprocess",
                        "tempfile",
                        "textwrap",
                        "threading",
                        "time",
                        "tokenize",
                        "traceback",
                        "?tty",
                        "urllib.parse",
                        "warnings",
                    ]),
                Part::python_module()
                    .min_version((3, 7, 7))
                    .deps(&[
                        "collections",
                        "email.message",
                        "http.server",
                        "importlib._bootstrap",
                        "importlib._bootstrap_external",
                        "importlib.machinery",
                        "importlib.util",
                        "inspect",
                        "io",
                        "os",
                        "pkgutil",
                        "platform",
                        "re",
                        "reprlib",
                        "select",
                        "subprocess",
                        "sysconfig",
                        "tempfile",
                        "textwrap",
                        "threading",
                        "time",
                        "tokenize",
                        "traceback",
                        "?tty",
                        "urllib.parse",
                        "warnings",
                    ]),
            ],
        ),
        (
            "pyexpat",
            vec![
                Part::extension_module()
                    .max_version((3, 7, 4))
                    .internal()
                    .defines(&[
                        "XML_STATIC",
                        "win#COMPILED_FROM_DSP",
                        "!win#HAVE_EXPAT_CONFIG_H",
                        "!win#XML_DEV_URANDOM",
                    ])
                    .includepath(&["expat"])
                    .source(&[
                        "expat/loadlibrary.c",
                        "expat/xmlparse.c",
                        "expat/xmlrole.c",
                        "expat/xmltok.c",
                        "pyexpat.c",
                    ])
                    .pyd("pyexpat.pyd"),
                Part::extension_module()
                    .min_version((3, 7, 5))
                    .internal()
                    .defines(&["XML_STATIC", "!win#HAVE_EXPAT_CONFIG_H", "!win#XML_DEV_URANDOM"])
                    .includepath(&["expat"])
                    .source(&["expat/xmlparse.c", "expat/xmlrole.c", "expat/xmltok.c", "pyexpat.c"])
                    .pyd("pyexpat.pyd"),
            ],
        ),
        (
            "queue",
            vec![
                Part::python_module()
                    .max_version((3, 6))
                    .deps(&["collections", "heapq", "threading", "time"]),
                Part::python_module()
                    .min_version((3, 7))
                    .deps(&["collections", "heapq", "_queue", "threading", "time"]),
            ],
        ),
        ("quopri", vec![Part::python_module().deps(&["binascii", "io"])]),
        (
            "random",
            vec![
                Part::python_module()
                    .version((3, 5))
                    .deps(&[
                        "_collections_abc",
                        "hashlib",
                        "math",
                        "os",
                        "_random",
                        "time",
                        "types",
                        "warnings",
                    ]),
                Part::python_module()
                    .min_version((3, 6))
                    .deps(&[
                        "bisect",
                        "_collections_abc",
                        "hashlib",
                        "itertools",
                        "math",
                        "os",
                        "_random",
                        "types",
                        "warnings",
                    ]),
            ],
        ),
        (
            "re",
            vec![
                Part::python_module()
                    .version((3, 5))
                    .deps(&["copyreg", "_locale", "sre_compile", "sre_constants", "sre_parse"]),
                Part::python_module()
                    .min_version((3, 6))
                    .deps(&[
                        "copyreg",
                        "enum",
                        "functools",
                        "_locale",
                        "sre_compile",
                        "sre_constants",
                        "sre_parse",
                    ]),
            ],
        ),
        (
            "readline",
            vec![
                Part::extension_module()
                    .target("!win")
                    .deps(&["Readline:readline"])
                    .source(&["readline.c"]),
            ],
        ),
        ("reprlib", vec![Part::python_module().deps(&["itertools", "_thread"])]),
        ("resource", vec![Part::extension_module().target("!win").source(&["resource.c"])]),
        ("rlcompleter", vec![Part::python_module().deps(&["atexit", "keyword", "re", "readline"])]),
        (
            "runpy",
            vec![
                Part::python_module()
                    .max_version((3, 5, 2))
                    .deps(&["importlib.machinery", "importlib.util", "pkgutil", "types"]),
                Part::python_module()
                    .min_version((3, 5, 3))
                    .deps(&[
                        "importlib.machinery",
                        "importlib.util",
                        "pkgutil",
                        "types",
                        "warnings",
                    ]),
            ],
        ),
        ("sched", vec![Part::python_module().deps(&["collections", "heapq", "threading", "time"])]),
        (
            "secrets",
            vec![
                Part::python_module()
                    .min_version((3, 6))
                    .deps(&["base64", "binascii", "hmac", "os", "random"]),
            ],
        ),
        ("select", vec![Part::extension_module().source(&["selectmodule.c"]).pyd("select.pyd")]),
        (
            "selectors",
            vec![
                Part::python_module()
                    .max_version((3, 6))
                    .deps(&["abc", "collections", "math", "select"]),
                Part::python_module()
                    .min_version((3, 7))
                    .deps(&["abc", "collections", "collections.abc", "math", "select"]),
            ],
        ),
        (
            "shelve",
            vec![
                Part::python_module()
                    .max_version((3, 6))
                    .deps(&["collections", "dbm", "io", "pickle"]),
                Part::python_module()
                    .min_version((3, 7))
                    .deps(&["collections.abc", "dbm", "io", "pickle"]),
            ],
        ),
        ("shlex", vec![Part::python_module().deps(&["collections", "io", "os", "re"])]),
        (
            "shutil",
            vec![
                Part::python_module()
                    .max_version((3, 6))
                    .deps(&[
                        "?bz2",
                        "collections",
                        "errno",
                        "fnmatch",
                        "!win#grp",
                        "?lzma",
                        "win#nt",
                        "os",
                        "!win#pwd",
                        "stat",
                        "tarfile",
                        "zipfile",
                    ]),
                Part::python_module()
                    .min_version((3, 7))
                    .deps(&[
                        "?bz2",
                        "collections",
                        "errno",
                        "fnmatch",
                        "!win#grp",
                        "?lzma",
                        "win#nt",
                        "os",
                        "!win#pwd",
                        "stat",
                        "tarfile",
                        "zipfile",
                        "?zlib",
                    ]),
            ],
        ),
        ("signal", vec![Part::python_module().deps(&["enum", "functools", "_signal"])]),
        (
            "smtpd",
            vec![
                Part::python_module()
                    .deps(&[
                        "asynchat",
                        "asyncore",
                        "collections",
                        "email._header_value_parser",
                        "errno",
                        "getopt",
                        "os",
                        "smtplib",
                        "socket",
                        "time",
                        "warnings",
                    ]),
            ],
        ),
        (
            "smtplib",
            vec![
                Part::python_module()
                    .version((3, 5))
                    .deps(&[
                        "base64",
                        "copy",
                        "datetime",
                        "email.base64mime",
                        "email.generator",
                        "email.message",
                        "email.utils",
                        "hmac",
                        "io",
                        "re",
                        "socket",
                        "?ssl",
                    ]),
                Part::python_module()
                    .min_version((3, 6))
                    .deps(&[
                        "base64",
                        "copy",
                        "datetime",
                        "email.base64mime",
                        "email.generator",
                        "email.message",
                        "email.utils",
                        "hmac",
                        "io",
                        "re",
                        "socket",
                        "?ssl",
                        "warnings",
                    ]),
            ],
        ),
        ("sndhdr", vec![Part::python_module().deps(&["aifc", "collections", "wave"])]),
        (
            "socket",
            vec![
                Part::python_module().deps(&["errno", "enum", "io", "os", "selectors", "_socket"]),
            ],
        ),
        (
            "socketserver",
            vec![
                Part::python_module()
                    .max_version((3, 6))
                    .deps(&[
                        "errno",
                        "io",
                        "os",
                        "selectors",
                        "socket",
                        "time",
                        "traceback",
                        "threading",
                    ]),
                Part::python_module()
                    .min_version((3, 7))
                    .deps(&["io", "os", "selectors", "socket", "time", "traceback", "threading"]),
            ],
        ),
        ("spwd", vec![Part::extension_module().target("!win").source(&["spwdmodule.c"])]),
        ("sqlite3", vec![Part::python_module().deps(&["sqlite3.dbapi2"])]),
        (
            "sqlite3.dbapi2",
            vec![
                Part::python_module()
                    .internal()
                    .deps(&["sqlite3", "collections.abc", "datetime", "_sqlite3", "time"]),
            ],
        ),
        (
            "sre_compile",
            vec![
                Part::python_module().internal().deps(&["_sre", "sre_constants", "sre_parse"]),
            ],
        ),
        ("sre_constants", vec![Part::python_module().internal().deps(&["_sre"])]),
        ("sre_parse", vec![Part::python_module().internal().deps(&["sre_constants", "warnings"])]),
        (
            "ssl",
            vec![
                Part::python_module()
                    .max_version((3, 5, 1))
                    .deps(&[
                        "base64",
                        "calendar",
                        "collections",
                        "enum",
                        "errno",
                        "ipaddress",
                        "os",
                        "re",
                        "socket",
                        "_ssl",
                        "textwrap",
                        "time",
                    ]),
                Part::python_module()
                    .min_version((3, 5, 2))
                    .max_version((3, 6))
                    .deps(&[
                        "base64",
                        "calendar",
                        "collections",
                        "enum",
                        "errno",
                        "ipaddress",
                        "os",
                        "re",
                        "socket",
                        "_ssl",
                        "textwrap",
                        "time",
                        "warnings",
                    ]),
                Part::python_module()
                    .min_version((3, 7))
                    .deps(&[
                        "base64",
                        "calendar",
                        "collections",
                        "enum",
                        "errno",
                        "os",
                        "socket",
                        "_ssl",
                        "time",
                        "warnings",
                    ]),
            ],
        ),
        ("stat", vec![Part::python_module().deps(&["_stat"])]),
        (
            "statistics",
            vec![
                Part::python_module()
                    .max_version((3, 5, 1))
                    .deps(&["collections", "decimal", "fractions", "math"]),
                Part::python_module()
                    .min_version((3, 5, 2))
                    .max_version((3, 5))
                    .deps(&["collections", "decimal", "fractions", "itertools", "math"]),
                Part::python_module()
                    .min_version((3, 6))
                    .deps(&[
                        "bisect",
                        "collections",
                        "decimal",
                        "fractions",
                        "itertools",
                        "math",
                        "numbers",
                    ]),
            ],
        ),
        (
            "string",
            vec![
                Part::python_module()
                    .max_version((3, 6))
                    .deps(&["collections", "re", "_string", "warnings"]),
                Part::python_module().min_version((3, 7)).deps(&["collections", "re", "_string"]),
            ],
        ),
        ("stringprep", vec![Part::python_module().deps(&["unicodedata"])]),
        ("struct", vec![Part::python_module().deps(&["_struct"])]),
        (
            "subprocess",
            vec![
                Part::python_module()
                    .deps(&[
                        "errno",
                        "gc",
                        "io",
                        "win#msvcrt",
                        "os",
                        "!win#_posixsubprocess",
                        "!win#select",
                        "!win#selectors",
                        "signal",
                        "threading",
                        "time",
                        "traceback",
                        "warnings",
                        "win#_winapi",
                    ]),
            ],
        ),
        (
            "sunau",
            vec![
                Part::python_module().max_version((3, 6)).deps(&["audioop", "collections"]),
                Part::python_module()
                    .min_version((3, 7))
                    .deps(&["audioop", "collections", "warnings"]),
            ],
        ),
        ("symbol", vec![Part::python_module()]),
        ("symtable", vec![Part::python_module().deps(&["_symtable", "weakref"])]),
        (
            "sysconfig",
            vec![
                Part::python_module()
                    .version((3, 5))
                    .deps(&[
                        "os",
                        "ios|macos#_osx_support",
                        "pprint",
                        "re",
                        "!win#_sysconfigdata",
                        "ios|macos#types",
                        "warnings",
                    ]),
                Part::python_module()
                    .min_version((3, 6))
                    .deps(&[
                        "os",
                        "ios|macos#_osx_support",
                        "pprint",
                        "re",
                        "android#_sysconfigdata_m_linux_android",
                        "ios#_sysconfigdata_m_darwin_ios",
                        "macos#_sysconfigdata_m_darwin_darwin",
                        "linux#_sysconfigdata_m_linux_x86_64-linux-gnu",
                        "ios|macos#types",
                        "warnings",
                    ]),
            ],
        ),
        ("syslog", vec![Part::extension_module().target("!win").source(&["syslogmodule.c"])]),
        (
            "tabnanny",
            vec![
                Part::python_module().max_version((3, 6)).deps(&["getopt", "os", "tokenize"]),
                Part::python_module().min_version((3, 7)).deps(&["os", "tokenize"]),
            ],
        ),
        (
            "tarfile",
            vec![
                Part::python_module()
                    .deps(&[
                        "calendar",
                        "copy",
                        "errno",
                        "io",
                        "os",
                        "re",
                        "shutil",
                        "stat",
                        "struct",
                        "time",
                        "warnings",
                    ]),
            ],
        ),
        (
            "telnetlib",
            vec![
                Part::python_module()
                    .deps(&["errno", "re", "selectors", "socket", "_thread", "time"]),
            ],
        ),
        (
            "tempfile",
            vec![
                Part::python_module()
                    .deps(&[
                        "errno",
                        "functools",
                        "io",
                        "os",
                        "random",
                        "shutil",
                        "_thread",
                        "warnings",
                        "weakref",
                    ]),
            ],
        ),
        ("termios", vec![Part::extension_module().target("!win").source(&["termios.c"])]),
        ("textwrap", vec![Part::python_module().deps(&["re"])]),
        (
            "threading",
            vec![
                Part::python_module()
                    .max_version((3, 6))
                    .deps(&[
                        "_collections",
                        "itertools",
                        "_thread",
                        "time",
                        "traceback",
                        "_weakrefset",
                    ]),
                Part::python_module()
                    .min_version((3, 7))
                    .max_version((3, 7, 2))
                    .deps(&[
                        "_collections",
                        "itertools",
                        "os",
                        "_thread",
                        "time",
                        "traceback",
                        "_weakrefset",
                    ]),
                Part::python_module()
                    .min_version((3, 7, 3))
                    .deps(&[
                        "_collections",
                        "itertools",
                        "os",
                        "_thread",
                        "time",
                        "traceback",
                        "warnings",
                        "_weakrefset",
                    ]),
            ],
        ),
        ("time", vec![Part::core_extension_module()]),
        (
            "timeit",
            vec![
                Part::python_module().deps(&["gc", "itertools", "linecache", "time", "traceback"]),
            ],
        ),
        ("token", vec![Part::python_module()]),
        (
            "tokenize",
            vec![
                Part::python_module()
                    .deps(&["codecs", "collections", "io", "itertools", "re", "token"]),
            ],
        ),
        (
            "trace",
            vec![
                Part::python_module()
                    .version((3, 5))
                    .deps(&[
                        "dis",
                        "gc",
                        "inspect",
                        "linecache",
                        "os",
                        "pickle",
                        "re",
                        "threading",
                        "time",
                        "token",
                        "tokenize",
                        "warnings",
                    ]),
                Part::python_module()
                    .version((3, 6))
                    .deps(&[
                        "argparse",
                        "dis",
                        "gc",
                        "inspect",
                        "linecache",
                        "os",
                        "pickle",
                        "re",
                        "threading",
                        "time",
                        "token",
                        "tokenize",
                    ]),
                Part::python_module()
                    .min_version((3, 7))
                    .max_version((3, 7, 6))
                    .deps(&[
                        "dis",
                        "gc",
                        "inspect",
                        "linecache",
                        "os",
                        "pickle",
                        "re",
                        "threading",
                        "time",
                        "token",
                        "tokenize",
                    ]),
                Part::python_module()
                    .min_version((3, 7, 7))
                    .deps(&[
                        "dis",
                        "gc",
                        "inspect",
                        "linecache",
                        "os",
                        "pickle",
                        "re",
                        "sysconfig",
                        "threading",
                        "time",
                        "token",
                        "tokenize",
                    ]),
            ],
        ),
        ("traceback", vec![Part::python_module().deps(&["collections", "itertools", "linecache"])]),
        (
            "tracemalloc",
            vec![
                Part::python_module()
                    .max_version((3, 6))
                    .deps(&[
                        "collections",
                        "fnmatch",
                        "functools",
                        "linecache",
                        "os",
                        "pickle",
                        "_tracemalloc",
                    ]),
                Part::python_module()
                    .min_version((3, 7))
                    .deps(&[
                        "collections.abc",
                        "fnmatch",
                        "functools",
                        "linecache",
                        "os",
                        "pickle",
                        "_tracemalloc",
                    ]),
            ],
        ),
        ("tty", vec![Part::python_module().target("!win").deps(&["termios"])]),
        (
            "types",
            vec![
                Part::python_module().max_version((3, 6)).deps(&["collections.abc", "functools"]),
                Part::python_module().min_version((3, 7)).deps(&["_collections_abc", "functools"]),
            ],
        ),
        (
            "typing",
            vec![
                Part::python_module()
                    .max_version((3, 5, 1))
                    .deps(&["abc", "collections", "collections.abc", "functools", "re", "types"]),
                Part::python_module()
                    .min_version((3, 5, 2))
                    .max_version((3, 6, 1))
                    .deps(&[
                        "abc",
                        "collections",
                        "collections.abc",
                        "contextlib",
                        "functools",
                        "re",
                        "types",
                    ]),
                Part::python_module()
                    .min_version((3, 6, 2))
                    .max_version((3, 6))
                    .deps(&[
                        "abc",
                        "collections",
                        "collections.abc",
                        "_collections_abc",
                        "contextlib",
                        "functools",
                        "re",
                        "types",
                    ]),
                Part::python_module()
                    .min_version((3, 7))
                    .deps(&[
                        "abc",
                        "collections",
                        "collections.abc",
                        "contextlib",
                        "functools",
                        "operator",
                        "re",
                        "types",
                    ]),
            ],
        ),
        (
            "unicodedata",
            vec![
                Part::extension_module().source(&["unicodedata.c"]).pyd("unicodedata.pyd"),
            ],
        ),
        ("urllib", vec![Part::python_module()]),
        ("urllib.error", vec![Part::python_module().deps(&["urllib", "urllib.response"])]),
        (
            "urllib.parse",
            vec![
                Part::python_module().max_version((3, 5, 6)).deps(&["urllib", "collections", "re"]),
                Part::python_module()
                    .min_version((3, 5, 7))
                    .max_version((3, 5))
                    .deps(&["urllib", "collections", "re", "unicodedata"]),
                Part::python_module()
                    .min_version((3, 6))
                    .max_version((3, 6, 8))
                    .deps(&["urllib", "collections", "re"]),
                Part::python_module()
                    .min_version((3, 6, 9))
                    .max_version((3, 6))
                    .deps(&["urllib", "collections", "re", "unicodedata"]),
                Part::python_module()
                    .min_version((3, 7))
                    .max_version((3, 7, 2))
                    .deps(&["urllib", "collections", "re"]),
                Part::python_module()
                    .min_version((3, 7, 3))
                    .deps(&["urllib", "collections", "re", "unicodedata"]),
            ],
        ),
        (
            "urllib.request",
            vec![
                Part::python_module()
                    .max_version((3, 5, 1))
                    .deps(&[
                        "urllib",
                        "base64",
                        "bisect",
                        "collections",
                        "contextlib",
                        "email",
                        "email.utils",
                        "macos#fnmatch",
                        "ftplib",
                        "getpass",
                        "hashlib",
                        "http.client",
                        "http.cookiejar",
                        "io",
                        "mimetypes",
                        "win#nturl2path",
                        "os",
                        "posixpath",
                        "re",
                        "macos#_scproxy",
                        "socket",
                        "?ssl",
                        "tempfile",
                        "time",
                        "urllib.error",
                        "urllib.parse",
                        "urllib.response",
                        "warnings",
                        "win#winreg",
                    ]),
                Part::python_module()
                    .min_version((3, 5, 2))
                    .max_version((3, 6))
                    .deps(&[
                        "urllib",
                        "base64",
                        "bisect",
                        "collections",
                        "contextlib",
                        "email",
                        "email.utils",
                        "macos#fnmatch",
                        "ftplib",
                        "getpass",
                        "hashlib",
                        "http.client",
                        "http.cookiejar",
                        "io",
                        "mimetypes",
                        "win#nturl2path",
                        "os",
                        "posixpath",
                        "re",
                        "macos#_scproxy",
                        "socket",
                        "?ssl",
                        "string",
                        "tempfile",
                        "time",
                        "urllib.error",
                        "urllib.parse",
                        "urllib.response",
                        "warnings",
                        "win#winreg",
                    ]),
                Part::python_module()
                    .min_version((3, 7))
                    .deps(&[
                        "urllib",
                        "base64",
                        "bisect",
                        "contextlib",
                        "email",
                        "email.utils",
                        "macos#fnmatch",
                        "ftplib",
                        "getpass",
                        "hashlib",
                        "http.client",
                        "http.cookiejar",
                        "io",
                        "mimetypes",
                        "win#nturl2path",
                        "os",
                        "posixpath",
                        "re",
                        "macos#_scproxy",
                        "socket",
                        "?ssl",
                        "string",
                        "tempfile",
                        "time",
                        "urllib.error",
                        "urllib.parse",
                        "urllib.response",
                        "warnings",
                        "win#winreg",
                    ]),
            ],
        ),
        (
            "urllib.response",
            vec![
                Part::python_module()
                    .version((3, 5))
                    .deps(&["urllib", "tempfile", "urllib.parse", "urllib.request"]),
                Part::python_module()
                    .min_version((3, 6))
                    .deps(&["urllib", "collections", "tempfile", "urllib.parse", "urllib.request"]),
            ],
        ),
        (
            "urllib.robotparser",
            vec![
                Part::python_module().deps(&["urllib", "time", "urllib.parse", "urllib.request"]),
            ],
        ),
        ("uu", vec![Part::python_module().deps(&["binascii", "os"])]),
        (
            "uuid",
            vec![
                Part::python_module()
                    .max_version((3, 6))
                    .deps(&[
                        "hashlib",
                        "os",
                        "random",
                        "re",
                        "shutil",
                        "socket",
                        "subprocess",
                        "time",
                    ]),
                Part::python_module()
                    .min_version((3, 7))
                    .deps(&[
                        "linux|macos|win#ctypes",
                        "enum",
                        "hashlib",
                        "os",
                        "random",
                        "shutil",
                        "socket",
                        "subprocess",
                        "time",
                        "ios|macos#_uuid",
                        "warnings",
                    ]),
            ],
        ),
        (
            "warnings",
            vec![
                Part::python_module().max_version((3, 6)).deps(&["linecache", "re", "_warnings"]),
                Part::python_module()
                    .min_version((3, 7))
                    .deps(&["linecache", "re", "traceback", "_warnings"]),
            ],
        ),
        (
            "wave",
            vec![
                Part::python_module()
                    .max_version((3, 6))
                    .deps(&["audioop", "chunk", "collections", "struct"]),
                Part::python_module()
                    .min_version((3, 7))
                    .deps(&["audioop", "chunk", "collections", "struct", "warnings"]),
            ],
        ),
        (
            "weakref",
            vec![
                Part::python_module()
                    .max_version((3, 6))
                    .deps(&[
                        "atexit",
                        "collections",
                        "copy",
                        "gc",
                        "itertools",
                        "_weakref",
                        "_weakrefset",
                    ]),
                Part::python_module()
                    .min_version((3, 7))
                    .deps(&[
                        "atexit",
                        "_collections_abc",
                        "copy",
                        "gc",
                        "itertools",
                        "_weakref",
                        "_weakrefset",
                    ]),
            ],
        ),
        (
            "webbrowser",
            vec![
                Part::python_module()
                    .max_version((3, 6))
                    .deps(&[
                        "copy",
                        "glob",
                        "os",
                        "!win#pwd",
                        "shlex",
                        "shutil",
                        "socket",
                        "subprocess",
                        "tempfile",
                    ]),
                Part::python_module()
                    .min_version((3, 7))
                    .deps(&[
                        "copy",
                        "glob",
                        "os",
                        "!win#pwd",
                        "shlex",
                        "shutil",
                        "socket",
                        "subprocess",
                        "tempfile",
                        "threading",
                    ]),
            ],
        ),
        ("winreg", vec![Part::core_extension_module().target("win")]),
        (
            "winsound",
            vec![
                Part::extension_module()
                    .target("win")
                    .libs(&["-lwinmm"])
                    .source(&["../PC/winsound.c"])
                    .pyd("winsound.pyd"),
            ],
        ),
        ("wsgiref", vec![Part::python_module()]),
        (
            "wsgiref.handlers",
            vec![
                Part::python_module()
                    .max_version((3, 5, 1))
                    .deps(&[
                        "wsgiref",
                        "os",
                        "time",
                        "traceback",
                        "wsgiref.headers",
                        "wsgiref.util",
                    ]),
                Part::python_module()
                    .min_version((3, 5, 2))
                    .deps(&[
                        "wsgiref",
                        "os",
                        "time",
                        "traceback",
                        "warnings",
                        "wsgiref.headers",
                        "wsgiref.util",
                    ]),
            ],
        ),
        ("wsgiref.headers", vec![Part::python_module().deps(&["wsgiref", "re"])]),
        (
            "wsgiref.simple_server",
            vec![
                Part::python_module()
                    .max_version((3, 5, 1))
                    .deps(&[
                        "wsgiref",
                        "http.server",
                        "platform",
                        "urllib.parse",
                        "wsgiref.handlers",
                    ]),
                Part::python_module()
                    .min_version((3, 5, 2))
                    .max_version((3, 5))
                    .deps(&[
                        "wsgiref",
                        "http.server",
                        "io",
                        "platform",
                        "urllib.parse",
                        "wsgiref.handlers",
                    ]),
                Part::python_module()
                    .min_version((3, 6))
                    .deps(&[
                        "wsgiref",
                        "http.server",
                        "platform",
                        "urllib.parse",
                        "wsgiref.handlers",
                    ]),
            ],
        ),
        (
            "wsgiref.util",
            vec![
                Part::python_module().deps(&["wsgiref", "posixpath", "urllib.parse"]),
            ],
        ),
        ("wsgiref.validate", vec![Part::python_module().deps(&["wsgiref", "re", "warnings"])]),
        ("xdrlib", vec![Part::python_module().deps(&["functools", "io", "struct"])]),
        ("xml", vec![Part::python_module()]),
        ("xml.dom", vec![Part::python_module().deps(&["xml", "xml.dom.domreg"])]),
        ("xml.dom.NodeFilter", vec![Part::python_module().internal()]),
        ("xml.dom.domreg", vec![Part::python_module().internal().deps(&["xml.dom", "os"])]),
        (
            "xml.dom.expatbuilder",
            vec![
                Part::python_module()
                    .internal()
                    .deps(&[
                        "xml.dom",
                        "xml.dom.minicompat",
                        "xml.dom.minidom",
                        "xml.parsers.expat",
                    ]),
            ],
        ),
        ("xml.dom.minicompat", vec![Part::python_module().internal().deps(&["xml.dom"])]),
        (
            "xml.dom.minidom",
            vec![
                Part::python_module()
                    .deps(&["xml.dom", "codecs", "io", "xml.dom.minicompat", "xml.dom.xmlbuilder"]),
            ],
        ),
        (
            "xml.dom.pulldom",
            vec![
                Part::python_module()
                    .deps(&["xml.dom", "io", "xml.dom.minidom", "xml.sax.handler"]),
            ],
        ),
        (
            "xml.dom.xmlbuilder",
            vec![
                Part::python_module()
                    .internal()
                    .deps(&[
                        "xml.dom",
                        "copy",
                        "posixpath",
                        "urllib.parse",
                        "urllib.request",
                        "warnings",
                        "xml.dom.expatbuilder",
                        "xml.dom.NodeFilter",
                    ]),
            ],
        ),
        ("xml.etree", vec![Part::python_module().deps(&["xml"])]),
        (
            "xml.etree.ElementPath",
            vec![
                Part::python_module().internal().deps(&["xml.etree", "re"]),
            ],
        ),
        (
            "xml.etree.ElementTree",
            vec![
                Part::python_module()
                    .version((3, 5))
                    .deps(&[
                        "xml.etree",
                        "contextlib",
                        "_elementtree",
                        "io",
                        "locale",
                        "re",
                        "warnings",
                        "xml.etree.ElementPath",
                        "xml.parsers.expat",
                    ]),
                Part::python_module()
                    .version((3, 6))
                    .deps(&[
                        "xml.etree",
                        "collections",
                        "contextlib",
                        "_elementtree",
                        "io",
                        "locale",
                        "re",
                        "warnings",
                        "xml.etree.ElementPath",
                        "xml.parsers.expat",
                    ]),
                Part::python_module()
                    .min_version((3, 7))
                    .deps(&[
                        "xml.etree",
                        "collections",
                        "collections.abc",
                        "contextlib",
                        "_elementtree",
                        "io",
                        "locale",
                        "re",
                        "warnings",
                        "xml.etree.ElementPath",
                        "xml.parsers.expat",
                    ]),
            ],
        ),
        ("xml.parsers", vec![Part::python_module().deps(&["xml"])]),
        ("xml.parsers.expat", vec![Part::python_module().deps(&["xml.parsers", "pyexpat"])]),
        (
            "xml.sax",
            vec![
                Part::python_module()
                    .deps(&[
                        "xml.sax",
                        "io",
                        "os",
                        "xml.sax._exceptions",
                        "xml.sax.handler",
                        "xml.sax.xmlreader",
                    ]),
            ],
        ),
        ("xml.sax._exceptions", vec![Part::python_module().internal().deps(&["xml.sax"])]),
        ("xml.sax.handler", vec![Part::python_module().deps(&["xml.sax"])]),
        (
            "xml.sax.saxutils",
            vec![
                Part::python_module()
                    .deps(&[
                        "xml.sax",
                        "codecs",
                        "io",
                        "os",
                        "urllib.parse",
                        "urllib.request",
                        "xml.sax.handler",
                        "xml.sax.xmlreader",
                    ]),
            ],
        ),
        (
            "xml.sax.xmlreader",
            vec![
                Part::python_module()
                    .deps(&[
                        "xml.sax",
                        "xml.sax._exceptions",
                        "xml.sax.handler",
                        "xml.sax.saxutils",
                    ]),
            ],
        ),
        ("xmlrpc", vec![Part::python_module()]),
        (
            "xmlrpc.client",
            vec![
                Part::python_module()
                    .version((3, 5))
                    .deps(&[
                        "xmlrpc",
                        "base64",
                        "datetime",
                        "errno",
                        "http.client",
                        "io",
                        "socket",
                        "time",
                        "urllib.parse",
                        "xml.parsers.expat",
                    ]),
                Part::python_module()
                    .min_version((3, 6))
                    .deps(&[
                        "xmlrpc",
                        "base64",
                        "datetime",
                        "decimal",
                        "errno",
                        "http.client",
                        "io",
                        "socket",
                        "time",
                        "urllib.parse",
                        "xml.parsers.expat",
                    ]),
            ],
        ),
        (
            "xmlrpc.server",
            vec![
                Part::python_module()
                    .max_version((3, 5, 7))
                    .deps(&[
                        "xmlrpc",
                        "fcntl",
                        "http.server",
                        "inspect",
                        "os",
                        "pydoc",
                        "re",
                        "socketserver",
                        "traceback",
                        "xmlrpc.client",
                    ]),
                Part::python_module()
                    .min_version((3, 5, 8))
                    .max_version((3, 5))
                    .deps(&[
                        "xmlrpc",
                        "fcntl",
                        "html",
                        "http.server",
                        "inspect",
                        "os",
                        "pydoc",
                        "re",
                        "socketserver",
                        "traceback",
                        "xmlrpc.client",
                    ]),
                Part::python_module()
                    .min_version((3, 6))
                    .max_version((3, 6, 9))
                    .deps(&[
                        "xmlrpc",
                        "fcntl",
                        "http.server",
                        "inspect",
                        "os",
                        "pydoc",
                        "re",
                        "socketserver",
                        "traceback",
                        "xmlrpc.client",
                    ]),
                Part::python_module()
                    .min_version((3, 6, 10))
                    .max_version((3, 6))
                    .deps(&[
                        "xmlrpc",
                        "fcntl",
                        "html",
                        "http.server",
                        "inspect",
                        "os",
                        "pydoc",
                        "re",
                        "socketserver",
                        "traceback",
                        "xmlrpc.client",
                    ]),
                Part::python_module()
                    .min_version((3, 7))
                    .max_version((3, 7, 4))
                    .deps(&[
                        "xmlrpc",
                        "fcntl",
                        "functools",
                        "http.server",
                        "inspect",
                        "os",
                        "pydoc",
                        "re",
                        "socketserver",
                        "traceback",
                        "xmlrpc.client",
                    ]),
                Part::python_module()
                    .min_version((3, 7, 5))
                    .deps(&[
                        "xmlrpc",
                        "fcntl",
                        "functools",
                        "html",
                        "http.server",
                        "inspect",
                        "os",
                        "pydoc",
                        "re",
                        "socketserver",
                        "traceback",
                        "xmlrpc.client",
                    ]),
            ],
        ),
        (
            "zipapp",
            vec![
                Part::python_module()
                    .deps(&["contextlib", "os", "pathlib", "shutil", "stat", "zipfile"]),
            ],
        ),
        (
            "zipfile",
            vec![
                Part::python_module()
                    .max_version((3, 6))
                    .deps(&[
                        "binascii",
                        "importlib.util",
                        "io",
                        "os",
                        "re",
                        "shutil",
                        "stat",
                        "struct",
                        "threading",
                        "time",
                        "warnings",
                        "zlib",
                    ]),
                Part::python_module()
                    .min_version((3, 7))
                    .deps(&[
                        "binascii",
                        "importlib.util",
                        "io",
                        "os",
                        "shutil",
                        "stat",
                        "struct",
                        "threading",
                        "time",
                        "warnings",
                        "zlib",
                    ]),
            ],
        ),
        (
            "zipimport",
            vec![
                Part::extension_module().version((3, 5)).deps(&["zlib"]).source(&["zipimport.c"]),
                Part::core_extension_module().min_version((3, 6)).deps(&["zlib"]),
            ],
        ),
        (
            "zlib",
            vec![
                Part::extension_module()
                    .max_version((3, 6))
                    .includepath(&["zlib"])
                    .source(&[
                        "zlibmodule.c",
                        "zlib/adler32.c",
                        "zlib/compress.c",
                        "zlib/crc32.c",
                        "zlib/deflate.c",
                        "zlib/infback.c",
                        "zlib/inffast.c",
                        "zlib/inflate.c",
                        "zlib/inftrees.c",
                        "zlib/trees.c",
                        "zlib/uncompr.c",
                        "zlib/zutil.c",
                    ]),
                Part::extension_module()
                    .min_version((3, 7))
                    .deps(&["zlib:zlib"])
                    .source(&["zlibmodule.c"]),
            ],
        ),
    ];

    modules
        .into_iter()
        .map(|(name, parts)| (name.to_string(), parts))
        .collect()
}

/// The C source files of a core extension module, relative to the source
/// root, that are not already part of the interpreter's own sources.
pub fn core_module_sources(name: &str) -> &'static [&'static str] {
    match name {
        "_thread" => &["Modules/_threadmodule.c"],
        "atexit" => &["Modules/atexitmodule.c"],
        "errno" => &["Modules/errnomodule.c"],
        "faulthandler" => &["Modules/faulthandler.c"],
        "gc" => &["Modules/gcmodule.c"],
        "itertools" => &["Modules/itertoolsmodule.c"],
        "mmap" => &["Modules/mmapmodule.c"],
        "msvcrt" => &["PC/msvcrtmodule.c"],
        "posix" | "nt" => &["Modules/posixmodule.c"],
        "pwd" => &["Modules/pwdmodule.c"],
        "time" => &["Modules/timemodule.c"],
        "winreg" => &["PC/winreg.c"],
        "zipimport" => &["Modules/zipimport.c"],
        "_codecs" => &["Modules/_codecsmodule.c"],
        "_collections" => &["Modules/_collectionsmodule.c"],
        "_functools" => &["Modules/_functoolsmodule.c"],
        "_io" => &[
            "Modules/_io/_iomodule.c",
            "Modules/_io/bufferedio.c",
            "Modules/_io/bytesio.c",
            "Modules/_io/fileio.c",
            "Modules/_io/iobase.c",
            "Modules/_io/stringio.c",
            "Modules/_io/textio.c",
            "win#Modules/_io/winconsoleio.c",
        ],
        "_locale" => &["Modules/_localemodule.c"],
        "_operator" => &["Modules/_operator.c"],
        "_signal" => &["Modules/signalmodule.c"],
        "_sre" => &["Modules/_sre.c"],
        "_stat" => &["Modules/_stat.c"],
        "_symtable" => &["Modules/symtablemodule.c"],
        "_tracemalloc" => &["Modules/_tracemalloc.c", "Modules/hashtable.c"],
        "_weakref" => &["Modules/_weakref.c"],
        // Part of the interpreter's Objects and Python directories.
        _ => &[],
    }
}

/// The name of the function that initialises a core extension module.
pub fn core_module_init(name: &str, version: &crate::core::version::VersionNumber) -> String {
    match name {
        "marshal" => "PyMarshal_Init".to_string(),
        "_warnings" => "_PyWarnings_Init".to_string(),
        "_imp" if *version < (3, 7) => "PyInit_imp".to_string(),
        _ => format!("PyInit_{}", name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    use crate::core::part::PartKind;
    use crate::core::platform::Architecture;
    use crate::core::version::VersionNumber;
    use crate::sysroot::parts::PartCatalog;

    const CORE_MODULES: &[&str] = &[
        "_thread",
        "atexit",
        "errno",
        "faulthandler",
        "gc",
        "imp",
        "importlib",
        "io",
        "itertools",
        "marshal",
        "mmap",
        "msvcrt",
        "posix",
        "pwd",
        "time",
        "winreg",
        "zipimport",
        "_ast",
        "_codecs",
        "_collections",
        "encodings.aliases",
        "_functools",
        "_imp",
        "importlib._bootstrap",
        "importlib._bootstrap_external",
        "_io",
        "_locale",
        "nt",
        "_operator",
        "_signal",
        "_sre",
        "_stat",
        "_string",
        "_symtable",
        "_tracemalloc",
        "_warnings",
        "_weakref",
    ];

    fn catalog(version: &str, target: Architecture, has_openssl: bool) -> PartCatalog {
        let version: VersionNumber = version.parse().unwrap();
        let normalised = standard_library()
            .iter()
            .filter_map(|(name, parts)| {
                Part::normalise("Python", name, parts, &version, target).unwrap()
            })
            .collect();

        PartCatalog::resolve(normalised, has_openssl)
    }

    fn available(catalog: &PartCatalog, name: &str) -> bool {
        catalog.contains(&crate::core::part::PartName::new("Python", name))
    }

    #[test]
    fn test_names_are_unique() {
        let library = standard_library();
        let names: BTreeSet<&str> = library.iter().map(|(name, _)| name.as_str()).collect();

        assert_eq!(names.len(), library.len());
    }

    #[test]
    fn test_every_internal_dependency_is_described() {
        let library = standard_library();
        let names: BTreeSet<&str> = library.iter().map(|(name, _)| name.as_str()).collect();

        for (name, parts) in &library {
            for dep in parts.iter().flat_map(|p| p.deps.iter().chain(&p.hidden_deps)) {
                if dep.contains(':') {
                    continue;
                }

                let dep = dep.rsplit('#').next().unwrap();
                if dep.starts_with('?') {
                    continue;
                }
                let dep = dep.trim_start_matches('!');

                assert!(names.contains(dep), "{} depends on unknown {}", name, dep);
            }
        }
    }

    #[test]
    fn test_application_packages() {
        let library = standard_library();
        for name in ["asyncio", "csv", "email", "http", "sqlite3", "urllib", "xml.etree"] {
            assert!(library.iter().any(|(n, _)| n == name), "{} is missing", name);
        }

        // Parts that need no other component.
        let catalog = catalog("3.7.8", Architecture::Linux64, true);
        for name in [
            "csv",
            "email.mime.text",
            "http.client",
            "logging.handlers",
            "xml.etree.ElementTree",
        ] {
            assert!(available(&catalog, name), "{} is unavailable", name);
        }
        assert!(!available(&catalog, "sqlite3"));

        let v35 = self::catalog("3.5.9", Architecture::Linux64, true);
        assert!(!available(&v35, "_asyncio"));
        assert!(!available(&v35, "secrets"));
    }

    #[test]
    fn test_core_modules_are_core() {
        let library = standard_library();
        let version: VersionNumber = "3.7.8".parse().unwrap();

        for name in CORE_MODULES {
            let (_, parts) = library
                .iter()
                .find(|(n, _)| n == name)
                .unwrap_or_else(|| panic!("{} is missing", name));
            let part = parts.iter().find(|p| p.applies_to(&version)).unwrap();
            assert!(part.core, "{} is not core", name);
        }
    }

    #[test]
    fn test_platform_specific_modules() {
        let linux = catalog("3.7.8", Architecture::Linux64, false);
        assert!(available(&linux, "posix"));
        assert!(!available(&linux, "nt"));
        assert!(!available(&linux, "winreg"));

        let windows = catalog("3.7.8", Architecture::Win64, false);
        assert!(available(&windows, "nt"));
        assert!(available(&windows, "msvcrt"));
        assert!(!available(&windows, "pwd"));
    }

    #[test]
    fn test_version_alternatives() {
        let library = standard_library();
        let abc = &library.iter().find(|(n, _)| n == "abc").unwrap().1;

        let v36: VersionNumber = "3.6.11".parse().unwrap();
        let v37: VersionNumber = "3.7.8".parse().unwrap();
        assert_eq!(abc.iter().position(|p| p.applies_to(&v36)), Some(0));
        assert_eq!(abc.iter().position(|p| p.applies_to(&v37)), Some(1));

        let catalog = catalog("3.6.11", Architecture::Linux64, false);
        assert!(!available(&catalog, "_abc"));
        assert!(available(&catalog, "abc"));
    }

    #[test]
    fn test_openssl_dependencies() {
        let without = catalog("3.7.8", Architecture::Linux64, false);
        assert!(!available(&without, "_ssl"));
        assert!(!available(&without, "ssl"));
        assert!(available(&without, "hashlib"));

        let hashlib = without
            .get(&crate::core::part::PartName::new("Python", "hashlib"))
            .unwrap();
        assert!(hashlib.deps.iter().any(|d| d.name == "_md5"));
    }

    #[test]
    fn test_core_sources_and_init() {
        let v36: VersionNumber = "3.6.11".parse().unwrap();
        let v37: VersionNumber = "3.7.8".parse().unwrap();

        assert_eq!(core_module_sources("nt"), &["Modules/posixmodule.c"]);
        assert!(core_module_sources("_ast").is_empty());
        assert_eq!(core_module_init("_imp", &v36), "PyInit_imp");
        assert_eq!(core_module_init("_imp", &v37), "PyInit__imp");
        assert_eq!(core_module_init("marshal", &v37), "PyMarshal_Init");

        let catalog = catalog("3.7.8", Architecture::Linux64, false);
        let core_ext = catalog
            .iter()
            .filter(|p| p.core && matches!(p.kind, PartKind::ExtensionModule { .. }))
            .count();
        assert!(core_ext > 20);
    }
}
