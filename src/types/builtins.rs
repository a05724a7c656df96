//! Workflow expression builtin functions with documentation.
//!
//! The table is pure data: it is parsed into the process-wide `Registry` the
//! first time the registry is used and never changes afterwards.

use super::function::FunctionDef;

/// Every function the analyser knows about, ordered by name.
pub static BUILTIN_DEFS: &[FunctionDef] = &[
    FunctionDef {
        name: "action",
        min_args: 0,
        max_args: Some(0),
        param_types: &[],
        return_type: "Object",
        description: "Return the current action's output object at runtime. Use properties like .outputs, .inputs, .startTime, .endTime, .status, etc. (special context).",
    },
    FunctionDef {
        name: "actions",
        min_args: 1,
        max_args: Some(1),
        param_types: &["String"],
        return_type: "Object",
        description: "Return a specific action's output object at runtime, including outputs, inputs, status, etc.",
    },
    FunctionDef {
        name: "add",
        min_args: 2,
        max_args: Some(2),
        param_types: &["NumberLike", "NumberLike"],
        return_type: "Number",
        description: "Return the result from adding two numbers.",
    },
    FunctionDef {
        name: "addDays",
        min_args: 2,
        max_args: Some(3),
        param_types: &["TimestampString", "Integer", "String"],
        return_type: "TimestampString",
        description: "Add a number of days to a timestamp.",
    },
    FunctionDef {
        name: "addHours",
        min_args: 2,
        max_args: Some(3),
        param_types: &["TimestampString", "Integer", "String"],
        return_type: "TimestampString",
        description: "Add a number of hours to a timestamp.",
    },
    FunctionDef {
        name: "addMinutes",
        min_args: 2,
        max_args: Some(3),
        param_types: &["TimestampString", "Integer", "String"],
        return_type: "TimestampString",
        description: "Add a number of minutes to a timestamp.",
    },
    FunctionDef {
        name: "addProperty",
        min_args: 3,
        max_args: Some(3),
        param_types: &["Object", "String", "Any"],
        return_type: "Object",
        description: "Add a property and its value to a JSON object. Fails if property already exists.",
    },
    FunctionDef {
        name: "addSeconds",
        min_args: 2,
        max_args: Some(3),
        param_types: &["TimestampString", "Integer", "String"],
        return_type: "TimestampString",
        description: "Add a number of seconds to a timestamp.",
    },
    FunctionDef {
        name: "addToTime",
        min_args: 3,
        max_args: Some(4),
        param_types: &["TimestampString", "Integer", "String", "String"],
        return_type: "TimestampString",
        description: "Add a number of time units to a timestamp.",
    },
    FunctionDef {
        name: "and",
        min_args: 2,
        max_args: None,
        param_types: &["Boolean"],
        return_type: "Boolean",
        description: "Check whether all expressions are true.",
    },
    FunctionDef {
        name: "array",
        min_args: 1,
        max_args: Some(1),
        param_types: &["Any"],
        return_type: "Array",
        description: "Return an array from a single specified input.",
    },
    FunctionDef {
        name: "base64",
        min_args: 1,
        max_args: Some(1),
        param_types: &["String"],
        return_type: "Base64String",
        description: "Return the base64-encoded version for a string.",
    },
    FunctionDef {
        name: "base64ToBinary",
        min_args: 1,
        max_args: Some(1),
        param_types: &["Base64String"],
        return_type: "BinaryString",
        description: "Return the binary version for a base64-encoded string.",
    },
    FunctionDef {
        name: "base64ToString",
        min_args: 1,
        max_args: Some(1),
        param_types: &["Base64String"],
        return_type: "String",
        description: "Return the string version for a base64-encoded string (decoding). Preferred over decodeBase64().",
    },
    FunctionDef {
        name: "binary",
        min_args: 1,
        max_args: Some(1),
        param_types: &["String"],
        return_type: "BinaryString",
        description: "Return the base64-encoded binary version of a string.",
    },
    FunctionDef {
        name: "body",
        min_args: 1,
        max_args: Some(1),
        param_types: &["String"],
        return_type: "Any",
        description: "Return an action's body output. Shorthand for actions('<actionName>').outputs.body.",
    },
    FunctionDef {
        name: "bool",
        min_args: 1,
        max_args: Some(1),
        param_types: &["Any"],
        return_type: "Boolean",
        description: "Return the Boolean version of a value.",
    },
    FunctionDef {
        name: "chunk",
        min_args: 2,
        max_args: Some(2),
        param_types: &["String | Array", "Integer"],
        return_type: "Array",
        description: "Split a string or array into chunks of equal length.",
    },
    FunctionDef {
        name: "coalesce",
        min_args: 1,
        max_args: None,
        param_types: &["Any"],
        return_type: "Any",
        description: "Return the first non-null value from one or more parameters.",
    },
    FunctionDef {
        name: "concat",
        min_args: 2,
        max_args: None,
        param_types: &["String"],
        return_type: "String",
        description: "Combine two or more strings.",
    },
    FunctionDef {
        name: "contains",
        min_args: 2,
        max_args: Some(2),
        param_types: &["String | Array | Object", "Any"],
        return_type: "Boolean",
        description: "Check whether a collection has a specific item. Case-sensitive.",
    },
    FunctionDef {
        name: "convertFromUtc",
        min_args: 2,
        max_args: Some(3),
        param_types: &["TimestampString", "String", "String"],
        return_type: "TimestampString",
        description: "Convert a timestamp from Universal Time Coordinated (UTC) to the target time zone.",
    },
    FunctionDef {
        name: "convertTimeZone",
        min_args: 3,
        max_args: Some(4),
        param_types: &["TimestampString", "String", "String", "String"],
        return_type: "TimestampString",
        description: "Convert a timestamp from the source time zone to the target time zone.",
    },
    FunctionDef {
        name: "convertToUtc",
        min_args: 2,
        max_args: Some(3),
        param_types: &["TimestampString", "String", "String"],
        return_type: "TimestampString",
        description: "Convert a timestamp from the source time zone to Universal Time Coordinated (UTC).",
    },
    FunctionDef {
        name: "createArray",
        min_args: 1,
        max_args: None,
        param_types: &["Any"],
        return_type: "Array",
        description: "Return an array from multiple inputs.",
    },
    FunctionDef {
        name: "dataUri",
        min_args: 1,
        max_args: Some(1),
        param_types: &["String"],
        return_type: "DataUriString",
        description: "Return a data uniform resource identifier (URI) for a string.",
    },
    FunctionDef {
        name: "dataUriToBinary",
        min_args: 1,
        max_args: Some(1),
        param_types: &["DataUriString"],
        return_type: "BinaryString",
        description: "Return the binary version for a data uniform resource identifier (URI). Preferred over decodeDataUri().",
    },
    FunctionDef {
        name: "dataUriToString",
        min_args: 1,
        max_args: Some(1),
        param_types: &["DataUriString"],
        return_type: "String",
        description: "Return the string version for a data uniform resource identifier (URI).",
    },
    FunctionDef {
        name: "dateDifference",
        min_args: 2,
        max_args: Some(2),
        param_types: &["TimestampString", "TimestampString"],
        return_type: "TimespanString",
        description: "Return the difference between two timestamps as a timespan string.",
    },
    FunctionDef {
        name: "dayOfMonth",
        min_args: 1,
        max_args: Some(1),
        param_types: &["TimestampString"],
        return_type: "Integer",
        description: "Return the day of the month component from a timestamp.",
    },
    FunctionDef {
        name: "dayOfWeek",
        min_args: 1,
        max_args: Some(1),
        param_types: &["TimestampString"],
        return_type: "Integer",
        description: "Return the day of the week component from a timestamp (Sunday is 0).",
    },
    FunctionDef {
        name: "dayOfYear",
        min_args: 1,
        max_args: Some(1),
        param_types: &["TimestampString"],
        return_type: "Integer",
        description: "Return the day of the year component from a timestamp.",
    },
    FunctionDef {
        name: "decimal",
        min_args: 1,
        max_args: Some(1),
        param_types: &["String"],
        return_type: "Number",
        description: "Return a decimal number from a string.",
    },
    FunctionDef {
        name: "decodeBase64",
        min_args: 1,
        max_args: Some(1),
        param_types: &["Base64String"],
        return_type: "String",
        description: "Return the string version for a base64-encoded string. Deprecated, use base64ToString().",
    },
    FunctionDef {
        name: "decodeDataUri",
        min_args: 1,
        max_args: Some(1),
        param_types: &["DataUriString"],
        return_type: "BinaryString",
        description: "Return the binary version for a data uniform resource identifier (URI). Not preferred, use dataUriToBinary().",
    },
    FunctionDef {
        name: "decodeUriComponent",
        min_args: 1,
        max_args: Some(1),
        param_types: &["UriString"],
        return_type: "String",
        description: "Return a string that replaces escape characters with decoded versions.",
    },
    FunctionDef {
        name: "div",
        min_args: 2,
        max_args: Some(2),
        param_types: &["NumberLike", "NumberLike"],
        return_type: "Number",
        description: "Return the result from dividing two numbers (integer division if both inputs are integers).",
    },
    FunctionDef {
        name: "encodeUriComponent",
        min_args: 1,
        max_args: Some(1),
        param_types: &["String"],
        return_type: "UriString",
        description: "Return a URI-encoded version for a string by replacing URL-unsafe characters with escape characters. Not preferred, use uriComponent().",
    },
    FunctionDef {
        name: "empty",
        min_args: 1,
        max_args: Some(1),
        param_types: &["Collection"],
        return_type: "Boolean",
        description: "Check whether a collection is empty.",
    },
    FunctionDef {
        name: "endsWith",
        min_args: 2,
        max_args: Some(2),
        param_types: &["String", "String"],
        return_type: "Boolean",
        description: "Check whether a string ends with a specific substring. Not case-sensitive.",
    },
    FunctionDef {
        name: "equals",
        min_args: 2,
        max_args: Some(2),
        param_types: &["Any", "Any"],
        return_type: "Boolean",
        description: "Check whether both values, expressions, or objects are equivalent.",
    },
    FunctionDef {
        name: "first",
        min_args: 1,
        max_args: Some(1),
        param_types: &["String | Array"],
        return_type: "Any",
        description: "Return the first item from a string or array.",
    },
    FunctionDef {
        name: "float",
        min_args: 1,
        max_args: Some(2),
        param_types: &["String", "String"],
        return_type: "Float",
        description: "Convert a string version for a floating-point number to an actual floating point number.",
    },
    FunctionDef {
        name: "formatDateTime",
        min_args: 1,
        max_args: Some(3),
        param_types: &["TimestampString", "String", "String"],
        return_type: "String",
        description: "Return a timestamp in the specified format.",
    },
    FunctionDef {
        name: "formDataMultiValues",
        min_args: 2,
        max_args: Some(2),
        param_types: &["String", "String"],
        return_type: "Array",
        description: "Create an array with the values that match a key name in an action's form-data or form-encoded outputs.",
    },
    FunctionDef {
        name: "formDataValue",
        min_args: 2,
        max_args: Some(2),
        param_types: &["String", "String"],
        return_type: "String",
        description: "Return a single value that matches a key name in an action's form-data or form-encoded output. Throws error if multiple matches.",
    },
    FunctionDef {
        name: "formatNumber",
        min_args: 2,
        max_args: Some(3),
        param_types: &["NumberLike", "String", "String"],
        return_type: "String",
        description: "Return a number as a string based on the specified format.",
    },
    FunctionDef {
        name: "getFutureTime",
        min_args: 2,
        max_args: Some(3),
        param_types: &["Integer", "String", "String"],
        return_type: "TimestampString",
        description: "Return the current timestamp plus the specified time units.",
    },
    FunctionDef {
        name: "getPastTime",
        min_args: 2,
        max_args: Some(3),
        param_types: &["Integer", "String", "String"],
        return_type: "TimestampString",
        description: "Return the current timestamp minus the specified time units.",
    },
    FunctionDef {
        name: "greater",
        min_args: 2,
        max_args: Some(2),
        param_types: &["NumberLike | String", "NumberLike | String"],
        return_type: "Boolean",
        description: "Check whether the first value is greater than the second value.",
    },
    FunctionDef {
        name: "greaterOrEquals",
        min_args: 2,
        max_args: Some(2),
        param_types: &["NumberLike | String", "NumberLike | String"],
        return_type: "Boolean",
        description: "Check whether the first value is greater than or equal to the second value.",
    },
    FunctionDef {
        name: "guid",
        min_args: 0,
        max_args: Some(1),
        param_types: &["String"],
        return_type: "String",
        description: "Return a globally unique identifier (GUID) as a string.",
    },
    FunctionDef {
        name: "if",
        min_args: 3,
        max_args: Some(3),
        param_types: &["Boolean", "Any", "Any"],
        return_type: "Any",
        description: "Check whether an expression is true or false. Based on the result, return a specified value.",
    },
    FunctionDef {
        name: "indexOf",
        min_args: 2,
        max_args: Some(2),
        param_types: &["String", "String"],
        return_type: "Integer",
        description: "Return the starting position or index value for a substring. Not case-sensitive. Returns -1 if not found.",
    },
    FunctionDef {
        name: "int",
        min_args: 1,
        max_args: Some(1),
        param_types: &["String"],
        return_type: "Integer",
        description: "Convert the string version for an integer to an actual integer number.",
    },
    FunctionDef {
        name: "intersection",
        min_args: 2,
        max_args: None,
        param_types: &["Array | Object"],
        return_type: "Array | Object",
        description: "Return a collection that has only the common items across the specified collections.",
    },
    FunctionDef {
        name: "isFloat",
        min_args: 1,
        max_args: Some(2),
        param_types: &["String", "String"],
        return_type: "Boolean",
        description: "Return a boolean indicating whether a string is a floating-point number.",
    },
    FunctionDef {
        name: "isInt",
        min_args: 1,
        max_args: Some(1),
        param_types: &["String"],
        return_type: "Boolean",
        description: "Return a boolean that indicates whether a string is an integer.",
    },
    FunctionDef {
        name: "item",
        min_args: 0,
        max_args: Some(0),
        param_types: &[],
        return_type: "Any",
        description: "Return the current item in an array during a repeating action's current iteration (e.g., inside ForEach applied to array). (special context).",
    },
    FunctionDef {
        name: "items",
        min_args: 1,
        max_args: Some(1),
        param_types: &["String"],
        return_type: "Any",
        description: "Return the current item from a specific ForEach or Until loop's current cycle. (special context).",
    },
    FunctionDef {
        name: "iterationIndexes",
        min_args: 1,
        max_args: Some(1),
        param_types: &["String"],
        return_type: "Integer",
        description: "Return the index value for the current iteration inside an Until loop. (special context).",
    },
    FunctionDef {
        name: "json",
        min_args: 1,
        max_args: Some(1),
        param_types: &["String | XmlObject"],
        return_type: "Object | Array | Any",
        description: "Return the JavaScript Object Notation (JSON) type value, object, or array for a string or XML.",
    },
    FunctionDef {
        name: "join",
        min_args: 2,
        max_args: Some(2),
        param_types: &["Array", "String"],
        return_type: "String",
        description: "Return a string that has all the items from an array, separated by the specified character.",
    },
    FunctionDef {
        name: "last",
        min_args: 1,
        max_args: Some(1),
        param_types: &["String | Array"],
        return_type: "Any",
        description: "Return the last item from a collection.",
    },
    FunctionDef {
        name: "lastIndexOf",
        min_args: 2,
        max_args: Some(2),
        param_types: &["String", "String"],
        return_type: "Integer",
        description: "Return the starting position or index value for the last occurrence of a substring. Not case-sensitive.",
    },
    FunctionDef {
        name: "length",
        min_args: 1,
        max_args: Some(1),
        param_types: &["String | Array"],
        return_type: "Integer",
        description: "Return the number of items in a string or array.",
    },
    FunctionDef {
        name: "less",
        min_args: 2,
        max_args: Some(2),
        param_types: &["NumberLike | String", "NumberLike | String"],
        return_type: "Boolean",
        description: "Check whether the first value is less than the second value.",
    },
    FunctionDef {
        name: "lessOrEquals",
        min_args: 2,
        max_args: Some(2),
        param_types: &["NumberLike | String", "NumberLike | String"],
        return_type: "Boolean",
        description: "Check whether the first value is less than or equal to the second value.",
    },
    FunctionDef {
        name: "listCallbackUrl",
        min_args: 0,
        max_args: Some(0),
        param_types: &[],
        return_type: "String",
        description: "Return the 'callback URL' that calls a trigger or action. Works only with specific connector types (HttpWebhook, ApiConnectionWebhook). (special context).",
    },
    FunctionDef {
        name: "max",
        min_args: 1,
        max_args: None,
        param_types: &["NumberLike | Array"],
        return_type: "Number",
        description: "Return the highest value from a set of numbers or an array.",
    },
    FunctionDef {
        name: "min",
        min_args: 1,
        max_args: None,
        param_types: &["NumberLike | Array"],
        return_type: "Number",
        description: "Return the lowest value from a set of numbers or an array.",
    },
    FunctionDef {
        name: "mod",
        min_args: 2,
        max_args: Some(2),
        param_types: &["NumberLike", "NumberLike"],
        return_type: "Number",
        description: "Return the remainder from dividing two numbers.",
    },
    FunctionDef {
        name: "mul",
        min_args: 2,
        max_args: Some(2),
        param_types: &["NumberLike", "NumberLike"],
        return_type: "Number",
        description: "Return the product from multiplying two numbers.",
    },
    FunctionDef {
        name: "multipartBody",
        min_args: 2,
        max_args: Some(2),
        param_types: &["String", "Integer"],
        return_type: "Any",
        description: "Return the body for a specific part in an action's output that has multiple parts.",
    },
    FunctionDef {
        name: "not",
        min_args: 1,
        max_args: Some(1),
        param_types: &["Boolean"],
        return_type: "Boolean",
        description: "Check whether an expression is false.",
    },
    FunctionDef {
        name: "nthIndexOf",
        min_args: 3,
        max_args: Some(3),
        param_types: &["String", "String", "Integer"],
        return_type: "Integer",
        description: "Return the starting position or index value where the nth occurrence of a substring appears in a string. Returns -1 if not found.",
    },
    FunctionDef {
        name: "or",
        min_args: 2,
        max_args: None,
        param_types: &["Boolean"],
        return_type: "Boolean",
        description: "Check whether at least one expression is true.",
    },
    FunctionDef {
        name: "outputs",
        min_args: 1,
        max_args: Some(1),
        param_types: &["String"],
        return_type: "Object",
        description: "Return an action's outputs at runtime.",
    },
    FunctionDef {
        name: "parameters",
        min_args: 1,
        max_args: Some(1),
        param_types: &["String"],
        return_type: "Any",
        description: "Return the value for a parameter that is described in your workflow definition.",
    },
    FunctionDef {
        name: "parseDateTime",
        min_args: 1,
        max_args: Some(3),
        param_types: &["String", "String", "String"],
        return_type: "TimestampString",
        description: "Return the timestamp from a string that contains a timestamp.",
    },
    FunctionDef {
        name: "rand",
        min_args: 2,
        max_args: Some(2),
        param_types: &["Integer", "Integer"],
        return_type: "Integer",
        description: "Return a random integer from a specified range, inclusive of minValue, exclusive of maxValue.",
    },
    FunctionDef {
        name: "range",
        min_args: 2,
        max_args: Some(2),
        param_types: &["Integer", "Integer"],
        return_type: "Array",
        description: "Return an integer array that starts from a specified integer and has the specified count.",
    },
    FunctionDef {
        name: "removeProperty",
        min_args: 2,
        max_args: Some(2),
        param_types: &["Object", "String"],
        return_type: "Object",
        description: "Remove a property from a JSON object and return the updated object.",
    },
    FunctionDef {
        name: "replace",
        min_args: 3,
        max_args: Some(3),
        param_types: &["String", "String", "String"],
        return_type: "String",
        description: "Replace a substring with the specified string, and return the result string. Case-sensitive.",
    },
    FunctionDef {
        name: "result",
        min_args: 1,
        max_args: Some(1),
        param_types: &["String"],
        return_type: "Array",
        description: "Return the results (inputs and outputs) from the top-level actions inside the specified scoped action (For_each, Until, Scope).",
    },
    FunctionDef {
        name: "reverse",
        min_args: 1,
        max_args: Some(1),
        param_types: &["Array"],
        return_type: "Array",
        description: "Reverse the order of items in an array.",
    },
    FunctionDef {
        name: "setProperty",
        min_args: 3,
        max_args: Some(3),
        param_types: &["Object", "String", "Any"],
        return_type: "Object",
        description: "Set the value for a JSON object's property and return the updated object. Adds property if it doesn't exist.",
    },
    FunctionDef {
        name: "skip",
        min_args: 2,
        max_args: Some(2),
        param_types: &["Array", "Integer"],
        return_type: "Array",
        description: "Remove items from the front of a collection, and return all the other items.",
    },
    FunctionDef {
        name: "slice",
        min_args: 2,
        max_args: Some(3),
        param_types: &["String", "Integer", "Integer"],
        return_type: "String",
        description: "Return a substring by specifying the starting and ending position or value. Character at endIndex is not included.",
    },
    FunctionDef {
        name: "sort",
        min_args: 1,
        max_args: Some(2),
        param_types: &["Array", "String"],
        return_type: "Array",
        description: "Sort items in a collection (array). Can sort objects by a key.",
    },
    FunctionDef {
        name: "split",
        min_args: 2,
        max_args: Some(2),
        param_types: &["String", "String"],
        return_type: "Array",
        description: "Return an array that contains substrings, separated by the specified delimiter character.",
    },
    FunctionDef {
        name: "startOfDay",
        min_args: 1,
        max_args: Some(2),
        param_types: &["TimestampString", "String"],
        return_type: "TimestampString",
        description: "Return the start of the day for a timestamp.",
    },
    FunctionDef {
        name: "startOfHour",
        min_args: 1,
        max_args: Some(2),
        param_types: &["TimestampString", "String"],
        return_type: "TimestampString",
        description: "Return the start of the hour for a timestamp.",
    },
    FunctionDef {
        name: "startOfMonth",
        min_args: 1,
        max_args: Some(2),
        param_types: &["TimestampString", "String"],
        return_type: "TimestampString",
        description: "Return the start of the month for a timestamp.",
    },
    FunctionDef {
        name: "startsWith",
        min_args: 2,
        max_args: Some(2),
        param_types: &["String", "String"],
        return_type: "Boolean",
        description: "Check whether a string starts with a specific substring. Not case-sensitive.",
    },
    FunctionDef {
        name: "string",
        min_args: 1,
        max_args: Some(1),
        param_types: &["Any"],
        return_type: "String",
        description: "Return the string version for a value. Converts null to empty string.",
    },
    FunctionDef {
        name: "sub",
        min_args: 2,
        max_args: Some(2),
        param_types: &["NumberLike", "NumberLike"],
        return_type: "Number",
        description: "Return the result from subtracting the second number from the first number.",
    },
    FunctionDef {
        name: "substring",
        min_args: 2,
        max_args: Some(3),
        param_types: &["String", "Integer", "Integer"],
        return_type: "String",
        description: "Return characters from a string, starting from the specified position (index), for the specified length.",
    },
    FunctionDef {
        name: "subtractFromTime",
        min_args: 3,
        max_args: Some(4),
        param_types: &["TimestampString", "Integer", "String", "String"],
        return_type: "TimestampString",
        description: "Subtract a number of time units from a timestamp.",
    },
    FunctionDef {
        name: "take",
        min_args: 2,
        max_args: Some(2),
        param_types: &["String | Array", "Integer"],
        return_type: "String | Array",
        description: "Return items from the front of a collection.",
    },
    FunctionDef {
        name: "ticks",
        min_args: 1,
        max_args: Some(1),
        param_types: &["TimestampString"],
        return_type: "Integer",
        description: "Return the number of ticks (100-nanosecond intervals) for a specified timestamp.",
    },
    FunctionDef {
        name: "toLower",
        min_args: 1,
        max_args: Some(1),
        param_types: &["String"],
        return_type: "String",
        description: "Return a string in lowercase format.",
    },
    FunctionDef {
        name: "toUpper",
        min_args: 1,
        max_args: Some(1),
        param_types: &["String"],
        return_type: "String",
        description: "Return a string in uppercase format.",
    },
    FunctionDef {
        name: "trigger",
        min_args: 0,
        max_args: Some(0),
        param_types: &[],
        return_type: "Object",
        description: "Return the trigger's output object at runtime.",
    },
    FunctionDef {
        name: "triggerBody",
        min_args: 0,
        max_args: Some(0),
        param_types: &[],
        return_type: "Any",
        description: "Return the trigger's body output at runtime. Shorthand for trigger().outputs.body.",
    },
    FunctionDef {
        name: "triggerFormDataMultiValues",
        min_args: 1,
        max_args: Some(1),
        param_types: &["String"],
        return_type: "Array",
        description: "Create an array with values that match a key name in a trigger's form-data or form-encoded output.",
    },
    FunctionDef {
        name: "triggerFormDataValue",
        min_args: 1,
        max_args: Some(1),
        param_types: &["String"],
        return_type: "String",
        description: "Return a string with a single value that matches a key name in a trigger's form-data or form-encoded output. Throws error if multiple matches.",
    },
    FunctionDef {
        name: "triggerMultipartBody",
        min_args: 1,
        max_args: Some(1),
        param_types: &["Integer"],
        return_type: "Any",
        description: "Return the body for a specific part in a trigger's output that has multiple parts.",
    },
    FunctionDef {
        name: "triggerOutputs",
        min_args: 0,
        max_args: Some(0),
        param_types: &[],
        return_type: "Object",
        description: "Return the trigger's output object at runtime. Shorthand for trigger().outputs.",
    },
    FunctionDef {
        name: "trim",
        min_args: 1,
        max_args: Some(1),
        param_types: &["String"],
        return_type: "String",
        description: "Remove leading and trailing whitespace from a string, and return the updated string.",
    },
    FunctionDef {
        name: "union",
        min_args: 2,
        max_args: None,
        param_types: &["Array | Object"],
        return_type: "Array | Object",
        description: "Return a collection that has all the items from the specified collections. No duplicates.",
    },
    FunctionDef {
        name: "uriComponent",
        min_args: 1,
        max_args: Some(1),
        param_types: &["String"],
        return_type: "UriString",
        description: "Return a URI-encoded version for a string by replacing URL-unsafe characters with escape characters. Preferred over encodeUriComponent().",
    },
    FunctionDef {
        name: "uriComponentToBinary",
        min_args: 1,
        max_args: Some(1),
        param_types: &["UriString"],
        return_type: "BinaryString",
        description: "Return the binary version for a uniform resource identifier (URI) component.",
    },
    FunctionDef {
        name: "uriComponentToString",
        min_args: 1,
        max_args: Some(1),
        param_types: &["UriString"],
        return_type: "String",
        description: "Return the string version for a uniform resource identifier (URI) encoded string (decoding).",
    },
    FunctionDef {
        name: "uriHost",
        min_args: 1,
        max_args: Some(1),
        param_types: &["UriString"],
        return_type: "String",
        description: "Return the host value for a uniform resource identifier (URI).",
    },
    FunctionDef {
        name: "uriPath",
        min_args: 1,
        max_args: Some(1),
        param_types: &["UriString"],
        return_type: "String",
        description: "Return the path value for a uniform resource identifier (URI).",
    },
    FunctionDef {
        name: "uriPathAndQuery",
        min_args: 1,
        max_args: Some(1),
        param_types: &["UriString"],
        return_type: "String",
        description: "Return the path and query values for a uniform resource identifier (URI).",
    },
    FunctionDef {
        name: "uriPort",
        min_args: 1,
        max_args: Some(1),
        param_types: &["UriString"],
        return_type: "Integer",
        description: "Return the port value for a uniform resource identifier (URI).",
    },
    FunctionDef {
        name: "uriQuery",
        min_args: 1,
        max_args: Some(1),
        param_types: &["UriString"],
        return_type: "String",
        description: "Return the query value for a uniform resource identifier (URI).",
    },
    FunctionDef {
        name: "uriScheme",
        min_args: 1,
        max_args: Some(1),
        param_types: &["UriString"],
        return_type: "String",
        description: "Return the scheme value for a uniform resource identifier (URI).",
    },
    FunctionDef {
        name: "utcNow",
        min_args: 0,
        max_args: Some(1),
        param_types: &["String"],
        return_type: "TimestampString",
        description: "Return the current timestamp as a string.",
    },
    FunctionDef {
        name: "variables",
        min_args: 1,
        max_args: Some(1),
        param_types: &["String"],
        return_type: "Any",
        description: "Return the value for a specified variable.",
    },
    FunctionDef {
        name: "workflow",
        min_args: 0,
        max_args: Some(0),
        param_types: &[],
        return_type: "Object",
        description: "Return details about the workflow itself during run time, including id, name, type, location, run, and tags.",
    },
    FunctionDef {
        name: "xml",
        min_args: 1,
        max_args: Some(1),
        param_types: &["String | Object"],
        return_type: "XmlObject",
        description: "Return the XML version for a string that contains a JSON object.",
    },
    FunctionDef {
        name: "xpath",
        min_args: 2,
        max_args: Some(2),
        param_types: &["XmlObject | XmlString", "String"],
        return_type: "Array | XmlObject | Any",
        description: "Check XML for nodes or values that match an XPath (XML Path Language) expression, and return the matching nodes or values.",
    },

];
